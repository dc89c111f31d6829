//! Service Registry Implementation Registry

use rpclite_domain::ports::providers::ServiceRegistry;

use super::{ProviderEntry, describe_providers};

/// Registry entry for service registry backends
pub type ServiceRegistryProviderEntry = ProviderEntry<dyn ServiceRegistry>;

#[linkme::distributed_slice]
pub static SERVICE_REGISTRY_PROVIDERS: [ServiceRegistryProviderEntry] = [..];

/// List all registered service registry backends as (identifier, description)
pub fn list_service_registry_providers() -> Vec<(&'static str, &'static str)> {
    describe_providers(&SERVICE_REGISTRY_PROVIDERS)
}
