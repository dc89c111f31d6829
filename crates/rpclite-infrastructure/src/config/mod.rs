//! Configuration
//!
//! ```toml
//! [rpc]
//! name = "orders"
//! codec = "json"
//! transport = "http"
//! mock = false
//!
//! [rpc.registry]
//! registry = "static"
//! address = "10.0.0.5:9000"
//!
//! [logging]
//! level = "debug"
//! json_format = false
//! ```

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
