//! Typed, validated configuration for a smart-contract toolchain.
//!
//! Compiler selection, default network, and per-network connection
//! parameters (endpoint, signing credentials, chain ID), loaded from the
//! environment or a TOML file.

pub mod blockchain;
pub mod config;
pub mod observability;

pub use blockchain::{SignerError, Wallet};
pub use config::{load_config, ConfigError, ToolchainConfig};
