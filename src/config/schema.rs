//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the contract toolchain.
//! All types derive Serde traits so a configuration can be written to and read
//! back from TOML or JSON without loss.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blockchain::types::{SignerError, SignerResult};
use crate::blockchain::wallet::Wallet;
use crate::config::loader::ConfigError;
use crate::config::validation::validate_config;

/// Compiler release used when none is configured.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.19";

/// Name of the network selected when none is configured.
pub const DEFAULT_NETWORK: &str = "sepolia";

/// Sepolia JSON-RPC endpoint.
pub const SEPOLIA_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/demo";

/// Sepolia chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Root configuration for the toolchain.
///
/// Every way of obtaining one validates first: the loader, the
/// [`ToolchainConfigBuilder`], and deserializing it directly. Read-only
/// afterwards.
///
/// [`ToolchainConfigBuilder`]: crate::config::builder::ToolchainConfigBuilder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawToolchainConfig")]
pub struct ToolchainConfig {
    /// Key into `networks` used when no network is named explicitly.
    pub(crate) default_network: String,

    /// Contract-language compiler selection.
    pub(crate) compiler: CompilerSpec,

    /// Deployment targets by name.
    pub(crate) networks: BTreeMap<String, NetworkProfile>,
}

impl ToolchainConfig {
    pub fn compiler(&self) -> &CompilerSpec {
        &self.compiler
    }

    pub fn default_network(&self) -> &str {
        &self.default_network
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkProfile> {
        &self.networks
    }

    /// Look up a network profile by name.
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Profile of the default network.
    ///
    /// Always `Some`: validation rejects a dangling default.
    pub fn default_profile(&self) -> Option<&NetworkProfile> {
        self.network(&self.default_network)
    }

    /// Build the signer for account `index` of network `network`.
    ///
    /// This is where deferred credential validation happens: an unset
    /// credential fails here with [`SignerError::MissingCredential`].
    pub fn signer(&self, network: &str, index: usize) -> SignerResult<Wallet> {
        let profile = self
            .network(network)
            .ok_or_else(|| SignerError::UnknownNetwork(network.to_string()))?;
        profile.signer(network, index)
    }

    /// Signer for the first account of the default network.
    pub fn default_signer(&self) -> SignerResult<Wallet> {
        self.signer(&self.default_network, 0)
    }

    /// Try to build the signer of every configured account, in network order.
    ///
    /// A network without accounts yields one [`SignerError::NoSuchAccount`]
    /// entry so it cannot pass unnoticed.
    pub fn signers(&self) -> Vec<(&str, usize, SignerResult<Wallet>)> {
        let mut out = Vec::new();
        for (name, profile) in &self.networks {
            if profile.accounts.is_empty() {
                out.push((name.as_str(), 0, profile.signer(name, 0)));
                continue;
            }
            for index in 0..profile.accounts.len() {
                out.push((name.as_str(), index, profile.signer(name, index)));
            }
        }
        out
    }

    /// Copy of this configuration with every set credential masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for profile in copy.networks.values_mut() {
            for account in &mut profile.accounts {
                if account.is_set() {
                    *account = Credential::new(Credential::MASK);
                }
            }
        }
        copy
    }
}

/// Configuration as written, before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawToolchainConfig {
    pub(crate) default_network: String,
    pub(crate) compiler: CompilerSpec,
    pub(crate) networks: BTreeMap<String, NetworkProfile>,
}

impl TryFrom<RawToolchainConfig> for ToolchainConfig {
    type Error = ConfigError;

    fn try_from(raw: RawToolchainConfig) -> Result<Self, Self::Error> {
        let config = Self {
            default_network: raw.default_network,
            compiler: raw.compiler,
            networks: raw.networks,
        };
        validate_config(&config).map_err(ConfigError::Malformed)?;
        Ok(config)
    }
}

/// Compiler selection.
///
/// Deserializes from either a bare version string (`compiler = "0.8.19"`) or a
/// table with `version` and optional `optimizer`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "CompilerRepr")]
pub struct CompilerSpec {
    /// Compiler release, `MAJOR.MINOR.PATCH`.
    pub version: String,

    /// Optimizer settings passed to the compiler.
    pub optimizer: OptimizerSettings,
}

impl CompilerSpec {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            optimizer: OptimizerSettings::default(),
        }
    }
}

impl Default for CompilerSpec {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER_VERSION)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompilerRepr {
    Version(String),
    Full(CompilerTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CompilerTable {
    version: String,
    #[serde(default)]
    optimizer: OptimizerSettings,
}

impl From<CompilerRepr> for CompilerSpec {
    fn from(repr: CompilerRepr) -> Self {
        match repr {
            CompilerRepr::Version(version) => Self::new(version),
            CompilerRepr::Full(CompilerTable { version, optimizer }) => Self { version, optimizer },
        }
    }
}

/// Optimizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerSettings {
    pub enabled: bool,

    /// Expected number of contract invocations to optimize for.
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// One deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
    /// JSON-RPC endpoint.
    pub url: String,

    /// Chain ID for EIP-155 replay protection. Must be positive.
    pub chain_id: u64,

    /// Signing credentials, in account order.
    #[serde(default)]
    pub accounts: Vec<Credential>,
}

impl NetworkProfile {
    pub fn new(url: impl Into<String>, chain_id: u64, accounts: Vec<Credential>) -> Self {
        Self {
            url: url.into(),
            chain_id,
            accounts,
        }
    }

    /// Build the signer for account `index`. `network` is only used to label errors.
    pub fn signer(&self, network: &str, index: usize) -> SignerResult<Wallet> {
        let credential = self.accounts.get(index).ok_or_else(|| SignerError::NoSuchAccount {
            network: network.to_string(),
            index,
            available: self.accounts.len(),
        })?;

        if !credential.is_set() {
            return Err(SignerError::MissingCredential {
                network: network.to_string(),
                index,
            });
        }

        Wallet::from_private_key(credential.expose(), self.chain_id)
    }
}

/// A signing credential.
///
/// An empty credential is "unset": loading tolerates it, signing does not.
/// Serializes as the plain string; `Debug` never prints the secret.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    const MASK: &'static str = "<redacted>";

    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Credential with no secret.
    pub fn unset() -> Self {
        Self(String::new())
    }

    /// Unset when `value` is `None` or blank.
    pub fn from_optional(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self(v),
            _ => Self::unset(),
        }
    }

    pub fn is_set(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// The raw secret. Never log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            f.write_str("Credential(<redacted>)")
        } else {
            f.write_str("Credential(<unset>)")
        }
    }
}
