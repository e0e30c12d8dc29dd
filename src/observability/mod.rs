//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader, signer construction, CLI
//!     → tracing macros (structured fields)
//!     → logging.rs (subscriber: EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never interpolated secrets
//! - stderr only, so stdout stays clean for command output
//! - Filter configurable via RUST_LOG or an explicit directive

pub mod logging;

pub use logging::init_logging;
