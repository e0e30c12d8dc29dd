//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (.env already applied by the caller)
//!     → env.rs (EnvSource lookup, injectable)
//!     → loader.rs (built-in defaults, or TOML file + ${VAR} resolution)
//!     → validation.rs (semantic checks)
//!     → ToolchainConfig (validated, immutable)
//!     → passed by reference to whatever needs it
//!
//! On signing:
//!     ToolchainConfig::signer(network, index)
//!     → credential presence check (deferred from load time)
//!     → blockchain::Wallet
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - Validation separates syntactic (serde) from semantic checks
//! - Missing credentials are tolerated at load and rejected at use

pub mod builder;
pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use builder::ToolchainConfigBuilder;
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use loader::{load_config, load_config_file, load_config_str, ConfigError, PRIVATE_KEY_ENV_VAR};
pub use schema::{CompilerSpec, Credential, NetworkProfile, OptimizerSettings, ToolchainConfig};
pub use validation::{validate_config, ValidationError};
