//! Service metadata

use serde::{Deserialize, Serialize};

use crate::constants::SERVICE_KEY_SEPARATOR;

/// Address of one provider replica
///
/// A single service key may map to any number of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceMetaInfo {
    /// Qualified service name
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Provider host
    pub service_host: String,
    /// Provider port
    pub service_port: u16,
}

impl ServiceMetaInfo {
    /// Create service metadata
    pub fn new(
        service_name: impl Into<String>,
        service_version: impl Into<String>,
        service_host: impl Into<String>,
        service_port: u16,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            service_host: service_host.into(),
            service_port,
        }
    }

    /// Derive the registry key for a service name and version
    pub fn key_for(service_name: &str, service_version: &str) -> String {
        format!("{service_name}{SERVICE_KEY_SEPARATOR}{service_version}")
    }

    /// Registry key of the logical service (`name:version`)
    pub fn service_key(&self) -> String {
        Self::key_for(&self.service_name, &self.service_version)
    }

    /// Registry key of this replica (`name:version/host:port`)
    pub fn service_node_key(&self) -> String {
        format!(
            "{}/{}:{}",
            self.service_key(),
            self.service_host,
            self.service_port
        )
    }

    /// URL of this replica; hosts that already carry a scheme are kept as-is
    pub fn service_address(&self) -> String {
        if self.service_host.contains("://") {
            format!("{}:{}", self.service_host, self.service_port)
        } else {
            format!("http://{}:{}", self.service_host, self.service_port)
        }
    }
}
