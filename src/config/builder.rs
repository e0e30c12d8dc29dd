//! Programmatic construction of a [`ToolchainConfig`].

use std::collections::BTreeMap;

use crate::config::loader::ConfigError;
use crate::config::schema::{CompilerSpec, NetworkProfile, ToolchainConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Assembles a configuration from user-supplied network tables.
///
/// Adding the same network twice is remembered and reported by [`build`]
/// together with any other validation failure.
///
/// [`build`]: ToolchainConfigBuilder::build
#[derive(Debug, Clone)]
pub struct ToolchainConfigBuilder {
    default_network: String,
    compiler: CompilerSpec,
    networks: BTreeMap<String, NetworkProfile>,
    duplicates: Vec<String>,
}

impl ToolchainConfigBuilder {
    pub fn new(default_network: impl Into<String>) -> Self {
        Self {
            default_network: default_network.into(),
            compiler: CompilerSpec::default(),
            networks: BTreeMap::new(),
            duplicates: Vec::new(),
        }
    }

    pub fn compiler(mut self, compiler: CompilerSpec) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn network(mut self, name: impl Into<String>, profile: NetworkProfile) -> Self {
        let name = name.into();
        if self.networks.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.networks.insert(name, profile);
        }
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<ToolchainConfig, ConfigError> {
        let mut errors: Vec<ValidationError> = self
            .duplicates
            .iter()
            .cloned()
            .map(ValidationError::DuplicateNetwork)
            .collect();

        let config = ToolchainConfig {
            default_network: self.default_network,
            compiler: self.compiler,
            networks: self.networks,
        };

        if let Err(mut found) = validate_config(&config) {
            errors.append(&mut found);
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Malformed(errors))
        }
    }

    #[cfg(test)]
    pub(crate) fn build_unchecked(self) -> ToolchainConfig {
        ToolchainConfig {
            default_network: self.default_network,
            compiler: self.compiler,
            networks: self.networks,
        }
    }
}
