//! Composition root
//!
//! Builds the plugin registry, the application context and the proxy factory
//! and hands them out as shared handles. Nothing here is global: two
//! runtimes in one process are fully independent.
//!
//! ```ignore
//! let runtime = RpcRuntime::builder()
//!     .config_path("rpclite.toml")
//!     .custom_dir("deploy/descriptors")
//!     .build()?;
//! let users: UserServiceStub = runtime.get_proxy()?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rpclite_application::plugin::{DescriptorRoot, PluginRegistry};
use rpclite_application::ports::infrastructure::{ConfigSource, FixedConfigSource};
use rpclite_application::proxy::{ProviderSelector, ProxyFactory, ServiceStub};
use rpclite_application::ApplicationContext;
use rpclite_domain::error::Result;
use rpclite_domain::value_objects::RpcConfig;
use tracing::{debug, info};

use crate::config::ConfigLoader;
use crate::constants::DEFAULT_CUSTOM_DESCRIPTOR_DIR;

/// Wired client runtime
#[derive(Clone)]
pub struct RpcRuntime {
    plugins: Arc<PluginRegistry>,
    context: Arc<ApplicationContext>,
    factory: ProxyFactory,
}

impl std::fmt::Debug for RpcRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcRuntime")
            .field("plugins", &self.plugins)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl RpcRuntime {
    /// Start building a runtime
    pub fn builder() -> RpcRuntimeBuilder {
        RpcRuntimeBuilder::default()
    }

    /// Plugin registry with every capability loaded
    pub fn plugins(&self) -> &Arc<PluginRegistry> {
        &self.plugins
    }

    /// Application context
    pub fn context(&self) -> &Arc<ApplicationContext> {
        &self.context
    }

    /// Proxy factory bound to the context
    pub fn proxy_factory(&self) -> &ProxyFactory {
        &self.factory
    }

    /// Effective configuration, initializing the context on first use
    pub fn config(&self) -> Result<Arc<RpcConfig>> {
        self.context.config()
    }

    /// Typed stub for service `S`
    pub fn get_proxy<S: ServiceStub>(&self) -> Result<S> {
        self.factory.get_proxy()
    }
}

/// Builder for [`RpcRuntime`]
#[derive(Default)]
pub struct RpcRuntimeBuilder {
    config_path: Option<PathBuf>,
    custom_dirs: Vec<PathBuf>,
    config: Option<RpcConfig>,
    selector: Option<Arc<dyn ProviderSelector>>,
}

impl RpcRuntimeBuilder {
    /// Configuration file to load instead of the default locations
    pub fn config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add a custom-tier descriptor directory (repeatable, later wins)
    pub fn custom_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.custom_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Use an explicit configuration; files and environment are ignored
    pub fn config(mut self, config: RpcConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provider selection policy, first-provider by default
    pub fn selector(mut self, selector: Arc<dyn ProviderSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Wire the runtime
    ///
    /// With an explicit configuration the context is initialized here, so
    /// registry initialization errors surface from `build`.
    pub fn build(self) -> Result<RpcRuntime> {
        let custom_dirs = if self.custom_dirs.is_empty() {
            default_custom_dirs()
        } else {
            self.custom_dirs
        };

        let mut roots = vec![DescriptorRoot::Embedded];
        roots.extend(custom_dirs.iter().map(DescriptorRoot::custom));
        let plugins = Arc::new(PluginRegistry::new(roots));
        plugins.load_all();

        let source: Arc<dyn ConfigSource> = match (&self.config, &self.config_path) {
            (Some(config), _) => Arc::new(FixedConfigSource::new(config.clone())),
            (None, Some(path)) => Arc::new(ConfigLoader::new().with_config_path(path)),
            (None, None) => Arc::new(ConfigLoader::new()),
        };
        let context = Arc::new(ApplicationContext::new(Arc::clone(&plugins), source));
        if let Some(config) = self.config {
            context.init(config)?;
        }

        let factory = match self.selector {
            Some(selector) => ProxyFactory::with_selector(Arc::clone(&context), selector),
            None => ProxyFactory::new(Arc::clone(&context)),
        };

        info!(custom_dirs = custom_dirs.len(), "rpclite runtime ready");
        Ok(RpcRuntime {
            plugins,
            context,
            factory,
        })
    }
}

fn default_custom_dirs() -> Vec<PathBuf> {
    let dir = PathBuf::from(DEFAULT_CUSTOM_DESCRIPTOR_DIR);
    if dir.is_dir() {
        debug!(path = %dir.display(), "Using default custom descriptor directory");
        vec![dir]
    } else {
        Vec::new()
    }
}
