//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when building or using a signer.
#[derive(Debug, Error)]
pub enum SignerError {
    /// No network with this name is configured.
    #[error("Unknown network '{0}'")]
    UnknownNetwork(String),

    /// The network has fewer accounts than the requested index.
    #[error("Network '{network}' has no account {index} ({available} configured)")]
    NoSuchAccount {
        network: String,
        index: usize,
        available: usize,
    },

    /// The account's signing credential was never provided.
    #[error("Missing signing credential for account {index} on network '{network}'")]
    MissingCredential { network: String, index: usize },

    /// Invalid private key format or derivation error.
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// The signer rejected the payload.
    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Result type for signer operations.
pub type SignerResult<T> = Result<T, SignerError>;
