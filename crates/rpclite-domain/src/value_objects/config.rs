//! Framework configuration value objects
//!
//! Loaded once by the application context and read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_VERSION, DEFAULT_CODEC_KEY, DEFAULT_REGISTRY_ADDRESS,
    DEFAULT_REGISTRY_KEY, DEFAULT_REGISTRY_TIMEOUT_MS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TRANSPORT_KEY,
};

/// Service registry backend selection and parameters
///
/// ```toml
/// [rpc.registry]
/// registry = "memory"
/// address = "http://localhost:2379"
/// timeout_ms = 10000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Backend key resolved through the plugin registry
    pub registry: String,
    /// Coordination service address
    pub address: String,
    /// Optional username
    pub username: Option<String>,
    /// Optional password
    pub password: Option<String>,
    /// Timeout backends must apply to their remote operations
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY_KEY.to_string(),
            address: DEFAULT_REGISTRY_ADDRESS.to_string(),
            username: None,
            password: None,
            timeout_ms: DEFAULT_REGISTRY_TIMEOUT_MS,
        }
    }
}

impl RegistryConfig {
    /// Credentials, when both parts are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
            _ => None,
        }
    }
}

/// Process-wide framework configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Host providers in this process bind to
    pub server_host: String,
    /// Port providers in this process bind to
    pub server_port: u16,
    /// Answer every call with a synthesized default value
    pub mock: bool,
    /// Codec key resolved through the plugin registry
    pub codec: String,
    /// Transport key resolved through the plugin registry
    pub transport: String,
    /// Registry backend configuration
    pub registry: RegistryConfig,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_APP_VERSION.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            mock: false,
            codec: DEFAULT_CODEC_KEY.to_string(),
            transport: DEFAULT_TRANSPORT_KEY.to_string(),
            registry: RegistryConfig::default(),
        }
    }
}
