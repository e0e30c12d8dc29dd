//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (default network references an existing profile)
//! - Validate value ranges (chain IDs > 0, optimizer runs > 0)
//! - Check endpoint URLs are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ToolchainConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to callers
//! - Credentials are NOT checked here; an unset credential is only an error when
//!   a signer is built from it

use thiserror::Error;

use crate::config::schema::ToolchainConfig;

/// Endpoint schemes a network may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// A single structural problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_network '{0}' does not name a configured network")]
    DanglingDefaultNetwork(String),

    #[error("no networks configured")]
    NoNetworks,

    #[error("network names cannot be empty")]
    EmptyNetworkName,

    #[error("network '{0}' is defined more than once")]
    DuplicateNetwork(String),

    #[error("networks.{network}.url '{url}' is malformed: {reason}")]
    MalformedUrl {
        network: String,
        url: String,
        reason: String,
    },

    #[error("networks.{network}.chain_id must be positive")]
    InvalidChainId { network: String },

    #[error("compiler.version '{0}' is not MAJOR.MINOR.PATCH")]
    InvalidCompilerVersion(String),

    #[error("compiler.optimizer.runs must be positive when the optimizer is enabled")]
    InvalidOptimizerRuns,
}

/// Check every structural invariant of `config`.
pub fn validate_config(config: &ToolchainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_semver_triple(&config.compiler().version) {
        errors.push(ValidationError::InvalidCompilerVersion(
            config.compiler().version.clone(),
        ));
    }

    let optimizer = config.compiler().optimizer;
    if optimizer.enabled && optimizer.runs == 0 {
        errors.push(ValidationError::InvalidOptimizerRuns);
    }

    if config.networks().is_empty() {
        errors.push(ValidationError::NoNetworks);
    }

    if !config.networks().contains_key(config.default_network()) {
        errors.push(ValidationError::DanglingDefaultNetwork(
            config.default_network().to_string(),
        ));
    }

    for (name, profile) in config.networks() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyNetworkName);
        }

        if let Err(reason) = check_url(&profile.url) {
            errors.push(ValidationError::MalformedUrl {
                network: name.clone(),
                url: profile.url.clone(),
                reason,
            });
        }

        if profile.chain_id == 0 {
            errors.push(ValidationError::InvalidChainId {
                network: name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(format!("unsupported scheme '{}'", parsed.scheme()));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(())
}

fn is_semver_triple(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}
