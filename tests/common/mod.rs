//! Shared fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;
use toolchain_config::config::MapEnv;

/// Anvil's first account.
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

/// Environment with `PRIVATE_KEY` set to `key`.
#[allow(dead_code)]
pub fn env_with_key(key: &str) -> MapEnv {
    MapEnv::new().with("PRIVATE_KEY", key)
}

/// Write `content` to a temporary `.toml` file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
