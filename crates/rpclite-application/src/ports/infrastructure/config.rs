//! Configuration Source Port
//!
//! The application context asks a `ConfigSource` for the framework
//! configuration on first access. Loading files and environment variables is
//! the job of the infrastructure layer.

use rpclite_domain::error::Result;
use rpclite_domain::value_objects::RpcConfig;

/// Produces the framework configuration
pub trait ConfigSource: Send + Sync {
    /// Load the configuration
    fn load_rpc_config(&self) -> Result<RpcConfig>;
}

/// Configuration source returning a fixed value
#[derive(Debug, Clone, Default)]
pub struct FixedConfigSource {
    config: RpcConfig,
}

impl FixedConfigSource {
    /// Create a source that always yields `config`
    pub fn new(config: RpcConfig) -> Self {
        Self { config }
    }
}

impl ConfigSource for FixedConfigSource {
    fn load_rpc_config(&self) -> Result<RpcConfig> {
        Ok(self.config.clone())
    }
}
