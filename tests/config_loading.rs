//! End-to-end loading and signer construction.

use toolchain_config::config::{
    load_config, load_config_file, load_config_str, ConfigError, MapEnv, ToolchainConfig,
    ValidationError,
};
use toolchain_config::SignerError;

mod common;

const MULTI_NETWORK: &str = r#"
default_network = "sepolia"

[compiler]
version = "0.8.19"
optimizer = { enabled = true, runs = 500 }

[networks.sepolia]
url = "https://eth-sepolia.g.alchemy.com/v2/demo"
chain_id = 11155111
accounts = ["${PRIVATE_KEY}"]

[networks.local]
url = "http://127.0.0.1:8545"
chain_id = 31337
accounts = ["${PRIVATE_KEY}", "${SECOND_KEY}"]
"#;

#[test]
fn test_default_network_always_exists() {
    for env in [
        MapEnv::new(),
        common::env_with_key("abc123"),
        common::env_with_key(common::TEST_PRIVATE_KEY),
    ] {
        let config = load_config(&env).unwrap();
        assert!(config.networks().contains_key(config.default_network()));
        assert_eq!(config.compiler().version, "0.8.19");
        assert_eq!(config.network("sepolia").unwrap().chain_id, 11155111);
    }
}

#[test]
fn test_accounts_come_from_environment() {
    let config = load_config(&common::env_with_key("abc123")).unwrap();
    let accounts: Vec<&str> = config
        .network("sepolia")
        .unwrap()
        .accounts
        .iter()
        .map(|c| c.expose())
        .collect();
    assert_eq!(accounts, vec!["abc123"]);
}

#[test]
fn test_missing_key_fails_only_on_use() {
    let config = load_config(&MapEnv::new()).unwrap();
    match config.signer("sepolia", 0) {
        Err(SignerError::MissingCredential { network, index }) => {
            assert_eq!(network, "sepolia");
            assert_eq!(index, 0);
        }
        other => panic!("expected MissingCredential, got {:?}", other),
    }
}

#[test]
fn test_toml_round_trip() {
    let config = load_config(&common::env_with_key("abc123")).unwrap();
    let text = toml::to_string(&config).unwrap();
    let reparsed: ToolchainConfig = toml::from_str(&text).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_json_round_trip() {
    let config = load_config_str(MULTI_NETWORK, &common::env_with_key("abc123")).unwrap();
    let text = serde_json::to_string(&config).unwrap();
    let reparsed: ToolchainConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_load_file_with_several_networks() {
    let file = common::write_config(MULTI_NETWORK);
    let env = MapEnv::new().with("PRIVATE_KEY", common::TEST_PRIVATE_KEY);

    let config = load_config_file(file.path(), &env).unwrap();
    assert_eq!(config.networks().len(), 2);
    assert!(config.compiler().optimizer.enabled);
    assert_eq!(config.compiler().optimizer.runs, 500);

    let wallet = config.signer("local", 0).unwrap();
    assert_eq!(wallet.chain_id(), 31337);
    assert_eq!(wallet.address().to_string().to_lowercase(), common::TEST_ADDRESS);

    assert!(matches!(
        config.signer("local", 1),
        Err(SignerError::MissingCredential { index: 1, .. })
    ));
}

#[test]
fn test_malformed_file_reports_every_field() {
    let file = common::write_config(
        r#"
        default_network = "mainnet"
        compiler = "0.8"

        [networks.local]
        url = "localhost"
        chain_id = 0
        "#,
    );

    let err = load_config_file(file.path(), &MapEnv::new()).unwrap_err();
    let message = err.to_string();
    let ConfigError::Malformed(errors) = err else {
        panic!("expected Malformed, got {message}");
    };

    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&ValidationError::DanglingDefaultNetwork("mainnet".into())));
    assert!(errors.contains(&ValidationError::InvalidCompilerVersion("0.8".into())));
    assert!(errors.contains(&ValidationError::InvalidChainId { network: "local".into() }));
    assert!(message.contains("networks.local.url"));
}

#[tokio::test]
async fn test_default_signer_signs() {
    let config = load_config(&common::env_with_key(common::TEST_PRIVATE_KEY)).unwrap();
    let wallet = config.default_signer().unwrap();

    let signature = wallet.sign_message(b"deploy").await.unwrap();
    assert_eq!(
        signature.recover_address_from_msg(b"deploy").unwrap(),
        wallet.address()
    );
}

#[test]
fn test_shared_across_threads() {
    let config = std::sync::Arc::new(load_config(&common::env_with_key("abc123")).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = config.clone();
            std::thread::spawn(move || config.network("sepolia").unwrap().chain_id)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11155111);
    }
}

#[test]
fn test_misspelled_field_names_the_field() {
    let file = common::write_config(
        r#"
        default_network = "sepolia"
        compiler = "0.8.19"

        [networks.sepolia]
        url = "https://eth-sepolia.g.alchemy.com/v2/demo"
        chain_id = 11155111
        acounts = ["${PRIVATE_KEY}"]
        "#,
    );

    let err = load_config_file(file.path(), &common::env_with_key("abc123")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("acounts"));
}

#[test]
fn test_unvalidated_config_cannot_be_deserialized() {
    let result = toml::from_str::<ToolchainConfig>(
        r#"
        default_network = "mainnet"
        compiler = "0.8.19"

        [networks.sepolia]
        url = "https://eth-sepolia.g.alchemy.com/v2/demo"
        chain_id = 11155111
        "#,
    );
    assert!(result.is_err());
}
