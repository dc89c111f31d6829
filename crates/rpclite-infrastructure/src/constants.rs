//! Infrastructure constants

/// Configuration file name looked up by default
pub const DEFAULT_CONFIG_FILENAME: &str = "rpclite.toml";

/// Directory name under the platform config directory
pub const DEFAULT_CONFIG_DIR: &str = "rpclite";

/// Environment variable prefix; nested keys are separated by `__`
///
/// `RPCLITE__RPC__CODEC=bincode` sets `rpc.codec`.
pub const CONFIG_ENV_PREFIX: &str = "RPCLITE";

/// Separator between the prefix and nested key segments
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Custom descriptor directory used when none is given explicitly
pub const DEFAULT_CUSTOM_DESCRIPTOR_DIR: &str = "rpclite/custom";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "RPCLITE_LOG";
