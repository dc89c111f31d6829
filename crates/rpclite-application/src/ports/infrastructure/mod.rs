//! Infrastructure Ports

/// Configuration source port
pub mod config;

pub use config::{ConfigSource, FixedConfigSource};
