//! Service Registry Port
//!
//! Registration and discovery contract. How fresh "currently known"
//! providers are is defined by the backend.

use crate::error::Result;
use crate::value_objects::{RegistryConfig, ServiceMetaInfo};

/// Service registration and discovery capability
///
/// Backends are shared by every invocation thread and must tolerate
/// concurrent discovery calls.
pub trait ServiceRegistry: Send + Sync {
    /// Establish connection/session state; called once per process
    fn init(&self, config: &RegistryConfig) -> Result<()>;

    /// Register a provider replica
    fn register(&self, service: &ServiceMetaInfo) -> Result<()>;

    /// Remove a provider replica
    fn unregister(&self, service: &ServiceMetaInfo) -> Result<()>;

    /// Currently known live providers for a service key
    ///
    /// An empty vector is a valid answer meaning no provider is available.
    fn service_discovery(&self, service_key: &str) -> Result<Vec<ServiceMetaInfo>>;

    /// Release backend resources
    fn destroy(&self) -> Result<()> {
        Ok(())
    }

    /// Get the name of this backend
    fn registry_name(&self) -> &str;
}
