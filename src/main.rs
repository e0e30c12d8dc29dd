//! `toolchain-config`: inspect and check the contract toolchain configuration.
//!
//! ```text
//! .env / --env-file ──▶ process environment
//!                           │
//! --config <toml> ──────────┼──▶ loader ──▶ validation ──▶ ToolchainConfig
//!                           │                                   │
//!                  (built-in defaults)            show / check / address / sign
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use alloy::primitives::hex;
use clap::{Parser, Subcommand};

use toolchain_config::config::{load_config, load_config_file, ProcessEnv, ToolchainConfig};
use toolchain_config::observability::init_logging;

#[derive(Parser)]
#[command(name = "toolchain-config")]
#[command(about = "Inspect and check the contract toolchain configuration", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment file loaded before the configuration.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Do not load any environment file.
    #[arg(long)]
    no_dotenv: bool,

    /// Log filter directive (overrides RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configuration with credentials masked
    Show {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration
    Check {
        /// Also build every account's signer, failing on missing credentials
        #[arg(long)]
        require_signers: bool,
    },
    /// Print the address of a configured account
    Address {
        /// Network name (defaults to the configured default network)
        #[arg(short, long)]
        network: Option<String>,
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// Sign a message (EIP-191) with a configured account
    Sign {
        message: String,
        #[arg(short, long)]
        network: Option<String>,
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it has to be applied before the subscriber.
    let env_file = if cli.no_dotenv {
        Ok(false)
    } else {
        load_env_file(&cli.env_file)
    };
    init_logging(cli.log_level.as_deref());

    match env_file {
        Ok(true) => tracing::debug!(path = %cli.env_file.display(), "Loaded environment file"),
        Ok(false) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` when the file does not exist.
fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config_file(path, &ProcessEnv)?,
        None => load_config(&ProcessEnv)?,
    };

    match cli.command {
        Commands::Show { json } => {
            let redacted = config.redacted();
            if json {
                println!("{}", serde_json::to_string_pretty(&redacted)?);
            } else {
                print!("{}", toml::to_string_pretty(&redacted)?);
            }
        }
        Commands::Check { require_signers } => {
            if require_signers {
                check_signers(&config)?;
            }
            println!(
                "ok: compiler {}, default network '{}', {} network(s)",
                config.compiler().version,
                config.default_network(),
                config.networks().len()
            );
        }
        Commands::Address { network, index } => {
            let network = network.as_deref().unwrap_or(config.default_network());
            let wallet = config.signer(network, index)?;
            println!("{}", wallet.address());
        }
        Commands::Sign {
            message,
            network,
            index,
        } => {
            let network = network.as_deref().unwrap_or(config.default_network());
            let wallet = config.signer(network, index)?;
            let signature = wallet.sign_message(message.as_bytes()).await?;
            println!("{}", hex::encode_prefixed(signature.as_bytes()));
        }
    }

    Ok(())
}

/// Build every configured signer, reporting all failures before giving up.
/// A network without accounts counts as a failure.
fn check_signers(config: &ToolchainConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = Vec::new();

    for (name, index, result) in config.signers() {
        match result {
            Ok(wallet) => tracing::info!(
                network = %name,
                account = index,
                address = %wallet.address(),
                "Signer ready"
            ),
            Err(e) => failures.push(e.to_string()),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("; ").into())
    }
}
