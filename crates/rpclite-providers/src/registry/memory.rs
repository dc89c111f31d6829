//! In-memory service registry
//!
//! Registrations live in this process only. Useful for tests, for in-process
//! providers, and as the default backend when no coordination service is
//! configured.

use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use rpclite_application::ports::registry::{
    SERVICE_REGISTRY_PROVIDERS, ServiceRegistryProviderEntry,
};
use rpclite_domain::error::{Error, Result};
use rpclite_domain::ports::providers::ServiceRegistry;
use rpclite_domain::value_objects::{RegistryConfig, ServiceMetaInfo};
use tracing::{debug, info};

/// Implementation identifier of [`MemoryServiceRegistry`]
pub const MEMORY_REGISTRY_ID: &str = "rpclite.registry.MemoryServiceRegistry";

/// Process-local service registry
///
/// Replicas are grouped by service key. Registering a replica whose node key
/// is already present replaces the earlier entry.
#[derive(Debug, Default)]
pub struct MemoryServiceRegistry {
    services: DashMap<String, Vec<ServiceMetaInfo>>,
    config: RwLock<Option<RegistryConfig>>,
}

impl MemoryServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration recorded by the last `init`
    pub fn config(&self) -> Option<RegistryConfig> {
        self.config.read().ok().and_then(|config| config.clone())
    }

    /// Number of registered replicas across all services
    pub fn len(&self) -> usize {
        self.services.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check whether no replica is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ServiceRegistry for MemoryServiceRegistry {
    fn init(&self, config: &RegistryConfig) -> Result<()> {
        let mut recorded = self
            .config
            .write()
            .map_err(|_| Error::registry("memory registry lock poisoned"))?;
        *recorded = Some(config.clone());
        info!(address = %config.address, "Memory registry ready (address unused)");
        Ok(())
    }

    fn register(&self, service: &ServiceMetaInfo) -> Result<()> {
        let node_key = service.service_node_key();
        let mut replicas = self.services.entry(service.service_key()).or_default();
        replicas.retain(|existing| existing.service_node_key() != node_key);
        replicas.push(service.clone());
        debug!(node = %node_key, "Service registered");
        Ok(())
    }

    fn unregister(&self, service: &ServiceMetaInfo) -> Result<()> {
        let node_key = service.service_node_key();
        let service_key = service.service_key();
        if let Some(mut replicas) = self.services.get_mut(&service_key) {
            replicas.retain(|existing| existing.service_node_key() != node_key);
        }
        self.services
            .remove_if(&service_key, |_, replicas| replicas.is_empty());
        debug!(node = %node_key, "Service unregistered");
        Ok(())
    }

    fn service_discovery(&self, service_key: &str) -> Result<Vec<ServiceMetaInfo>> {
        Ok(self
            .services
            .get(service_key)
            .map(|replicas| replicas.value().clone())
            .unwrap_or_default())
    }

    fn destroy(&self) -> Result<()> {
        self.services.clear();
        Ok(())
    }

    fn registry_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SERVICE_REGISTRY_PROVIDERS)]
static MEMORY_REGISTRY: ServiceRegistryProviderEntry = ServiceRegistryProviderEntry {
    name: MEMORY_REGISTRY_ID,
    description: "Process-local in-memory service registry",
    factory: || Ok(Arc::new(MemoryServiceRegistry::new())),
};
