//! Static service registry
//!
//! Resolves every service key to a fixed provider list taken from
//! `RegistryConfig::address`, written as comma-separated `host:port` pairs:
//!
//! ```toml
//! [rpc.registry]
//! registry = "static"
//! address = "10.0.0.5:9000, 10.0.0.6:9000"
//! ```

use std::sync::{Arc, RwLock};

use rpclite_application::ports::registry::{
    SERVICE_REGISTRY_PROVIDERS, ServiceRegistryProviderEntry,
};
use rpclite_domain::constants::SERVICE_KEY_SEPARATOR;
use rpclite_domain::error::{Error, Result};
use rpclite_domain::ports::providers::ServiceRegistry;
use rpclite_domain::value_objects::{RegistryConfig, ServiceMetaInfo};
use tracing::{info, warn};

/// Implementation identifier of [`StaticServiceRegistry`]
pub const STATIC_REGISTRY_ID: &str = "rpclite.registry.StaticServiceRegistry";

/// Registry answering discovery from a configured endpoint list
///
/// Registration is not supported: the provider list is owned by
/// configuration.
#[derive(Debug, Default)]
pub struct StaticServiceRegistry {
    endpoints: RwLock<Option<Vec<(String, u16)>>>,
}

impl StaticServiceRegistry {
    /// Create an uninitialized registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated `host:port` list
    ///
    /// Hosts may carry a URL scheme (`https://host:443`).
    pub fn parse_endpoints(address: &str) -> Result<Vec<(String, u16)>> {
        let endpoints = address
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (host, port) = entry.rsplit_once(':').ok_or_else(|| {
                    Error::registry(format!("endpoint '{entry}' is not host:port"))
                })?;
                let port = port.parse::<u16>().map_err(|e| {
                    Error::registry(format!("endpoint '{entry}' has an invalid port: {e}"))
                })?;
                if host.is_empty() || host.ends_with("://") {
                    return Err(Error::registry(format!("endpoint '{entry}' has no host")));
                }
                Ok((host.to_string(), port))
            })
            .collect::<Result<Vec<_>>>()?;

        if endpoints.is_empty() {
            return Err(Error::registry("static registry address lists no endpoint"));
        }
        Ok(endpoints)
    }
}

impl ServiceRegistry for StaticServiceRegistry {
    fn init(&self, config: &RegistryConfig) -> Result<()> {
        let endpoints = Self::parse_endpoints(&config.address)?;
        info!(endpoints = endpoints.len(), "Static registry initialized");
        let mut guard = self
            .endpoints
            .write()
            .map_err(|_| Error::registry("static registry lock poisoned"))?;
        *guard = Some(endpoints);
        Ok(())
    }

    fn register(&self, service: &ServiceMetaInfo) -> Result<()> {
        warn!(node = %service.service_node_key(), "Static registry ignores registration");
        Err(Error::registry(
            "static registry does not accept registrations",
        ))
    }

    fn unregister(&self, service: &ServiceMetaInfo) -> Result<()> {
        Err(Error::registry(format!(
            "static registry cannot unregister {}",
            service.service_node_key()
        )))
    }

    fn service_discovery(&self, service_key: &str) -> Result<Vec<ServiceMetaInfo>> {
        let guard = self
            .endpoints
            .read()
            .map_err(|_| Error::registry("static registry lock poisoned"))?;
        let endpoints = guard
            .as_ref()
            .ok_or_else(|| Error::registry("static registry used before init"))?;

        let (name, version) = service_key
            .rsplit_once(SERVICE_KEY_SEPARATOR)
            .unwrap_or((service_key, ""));
        Ok(endpoints
            .iter()
            .map(|(host, port)| ServiceMetaInfo::new(name, version, host.as_str(), *port))
            .collect())
    }

    fn registry_name(&self) -> &str {
        "static"
    }
}

#[linkme::distributed_slice(SERVICE_REGISTRY_PROVIDERS)]
static STATIC_REGISTRY: ServiceRegistryProviderEntry = ServiceRegistryProviderEntry {
    name: STATIC_REGISTRY_ID,
    description: "Fixed provider list read from the registry address",
    factory: || Ok(Arc::new(StaticServiceRegistry::new())),
};
