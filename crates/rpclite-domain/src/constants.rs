//! Framework-wide constants
//!
//! Default keys and values used when no configuration overrides them.

// ============================================================================
// SERVICE CONSTANTS
// ============================================================================

/// Version appended to a service name when clients derive its service key
pub const DEFAULT_SERVICE_VERSION: &str = "1.0";

/// Separator between service name and version inside a service key
pub const SERVICE_KEY_SEPARATOR: &str = ":";

// ============================================================================
// CAPABILITY KEYS
// ============================================================================

/// Codec key used when none is configured
pub const DEFAULT_CODEC_KEY: &str = "json";

/// Service registry backend key used when none is configured
pub const DEFAULT_REGISTRY_KEY: &str = "memory";

/// Transport key used when none is configured
pub const DEFAULT_TRANSPORT_KEY: &str = "http";

// ============================================================================
// CONFIGURATION DEFAULTS
// ============================================================================

/// Default application name
pub const DEFAULT_APP_NAME: &str = "rpclite";

/// Default application version
pub const DEFAULT_APP_VERSION: &str = "1.0";

/// Default provider host
pub const DEFAULT_SERVER_HOST: &str = "localhost";

/// Default provider port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default coordination service address
pub const DEFAULT_REGISTRY_ADDRESS: &str = "http://localhost:2379";

/// Default registry operation timeout in milliseconds
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 10_000;
