//! Configuration loading from the environment and from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::builder::ToolchainConfigBuilder;
use crate::config::env::EnvSource;
use crate::config::schema::{
    CompilerSpec, Credential, NetworkProfile, RawToolchainConfig, ToolchainConfig,
    DEFAULT_NETWORK, SEPOLIA_CHAIN_ID, SEPOLIA_URL,
};
use crate::config::validation::ValidationError;

/// Environment variable holding the default network's signing key.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed configuration: {}", join_errors(.0))]
    Malformed(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the built-in configuration.
///
/// Compiler 0.8.19, default network `sepolia`, one Sepolia profile whose single
/// account is read from `PRIVATE_KEY`. A missing key does not fail here; it
/// fails when a signer is built from it.
pub fn load_config(env: &impl EnvSource) -> Result<ToolchainConfig, ConfigError> {
    let credential = Credential::from_optional(env.get(PRIVATE_KEY_ENV_VAR));
    if !credential.is_set() {
        tracing::warn!(
            env_var = PRIVATE_KEY_ENV_VAR,
            network = DEFAULT_NETWORK,
            "Signing credential not set; signing on this network will fail"
        );
    }

    let config = ToolchainConfigBuilder::new(DEFAULT_NETWORK)
        .compiler(CompilerSpec::default())
        .network(
            DEFAULT_NETWORK,
            NetworkProfile::new(SEPOLIA_URL, SEPOLIA_CHAIN_ID, vec![credential]),
        )
        .build()?;

    log_loaded(&config);
    Ok(config)
}

/// Parse, resolve and validate a TOML configuration document.
///
/// Account entries written as `${NAME}` are replaced by the value of `NAME`
/// from `env`; unset variables leave an unset credential behind. Unknown keys
/// are rejected by name.
pub fn load_config_str(content: &str, env: &impl EnvSource) -> Result<ToolchainConfig, ConfigError> {
    let mut raw: RawToolchainConfig = toml::from_str(content)?;

    for (name, profile) in raw.networks.iter_mut() {
        for (index, account) in profile.accounts.iter_mut().enumerate() {
            let Some(var) = env_reference(account.expose()) else {
                continue;
            };
            let resolved = Credential::from_optional(env.get(var));
            if !resolved.is_set() {
                tracing::warn!(
                    env_var = var,
                    network = %name,
                    account = index,
                    "Signing credential not set; signing with this account will fail"
                );
            }
            *account = resolved;
        }
    }

    let config = ToolchainConfig::try_from(raw)?;

    log_loaded(&config);
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config_file(path: &Path, env: &impl EnvSource) -> Result<ToolchainConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Read configuration file");
    load_config_str(&content, env)
}

/// `Some("NAME")` for a credential written exactly as `${NAME}`.
fn env_reference(raw: &str) -> Option<&str> {
    raw.trim()
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

fn log_loaded(config: &ToolchainConfig) {
    tracing::info!(
        compiler = %config.compiler().version,
        default_network = %config.default_network(),
        networks = config.networks().len(),
        "Configuration loaded"
    );
}
