//! Signer subsystem.
//!
//! # Data Flow
//! ```text
//! ToolchainConfig (network profile: chain ID + credentials)
//!     → wallet.rs (key parsing, signing)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from configuration credentials (environment-sourced)
//! - Never log private keys or sensitive data
//! - No network access: chain IDs are trusted as configured

pub mod types;
pub mod wallet;

pub use types::{ChainId, SignerError, SignerResult};
pub use wallet::Wallet;
