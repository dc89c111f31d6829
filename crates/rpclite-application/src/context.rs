//! Application context
//!
//! Process-wide configuration holder. The configuration is created exactly
//! once: a lock-free read serves every call after initialization, and the
//! first callers race into a blocking initialization path where only one of
//! them runs the loader and registry initialization while the others wait.
//!
//! The context is owned by the composition root and shared as
//! `Arc<ApplicationContext>`; nothing here is a global.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use rpclite_domain::error::{Error, Result};
use rpclite_domain::value_objects::RpcConfig;
use tracing::{info, warn};

use crate::plugin::{PluginRegistry, ServiceRegistryCapability};
use crate::ports::infrastructure::ConfigSource;

/// Lazily initialized framework configuration plus the plugin registry
pub struct ApplicationContext {
    plugins: Arc<PluginRegistry>,
    source: Arc<dyn ConfigSource>,
    config: OnceCell<Arc<RpcConfig>>,
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("plugins", &self.plugins)
            .field("config", &self.config.get())
            .finish_non_exhaustive()
    }
}

impl ApplicationContext {
    /// Create a context that loads its configuration from `source` on first use
    pub fn new(plugins: Arc<PluginRegistry>, source: Arc<dyn ConfigSource>) -> Self {
        Self {
            plugins,
            source,
            config: OnceCell::new(),
        }
    }

    /// Plugin registry used for capability resolution
    pub fn plugins(&self) -> &Arc<PluginRegistry> {
        &self.plugins
    }

    /// Check whether the configuration has been initialized
    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    /// Initialize with an explicit configuration
    ///
    /// Fails if the context was already initialized.
    pub fn init(&self, config: RpcConfig) -> Result<Arc<RpcConfig>> {
        let mut ran = false;
        let current = self.config.get_or_try_init(|| {
            ran = true;
            self.initialize(config)
        })?;
        if ran {
            Ok(Arc::clone(current))
        } else {
            Err(Error::configuration("application context is already initialized"))
        }
    }

    /// The framework configuration, loading it on first access
    ///
    /// A failing configuration source is recovered by falling back to
    /// `RpcConfig::default()`. A failing registry initialization is returned
    /// and leaves the context uninitialized.
    pub fn config(&self) -> Result<Arc<RpcConfig>> {
        if let Some(config) = self.config.get() {
            return Ok(Arc::clone(config));
        }
        self.config
            .get_or_try_init(|| {
                let config = self.source.load_rpc_config().unwrap_or_else(|e| {
                    warn!(error = %e, "Configuration load failed, using defaults");
                    RpcConfig::default()
                });
                self.initialize(config)
            })
            .map(Arc::clone)
    }

    fn initialize(&self, config: RpcConfig) -> Result<Arc<RpcConfig>> {
        info!(
            name = %config.name,
            version = %config.version,
            codec = %config.codec,
            transport = %config.transport,
            mock = config.mock,
            "rpc init"
        );
        let registry = self
            .plugins
            .get_instance::<ServiceRegistryCapability>(&config.registry.registry)?;
        registry.init(&config.registry)?;
        info!(
            registry = %config.registry.registry,
            address = %config.registry.address,
            "registry init"
        );
        Ok(Arc::new(config))
    }
}
