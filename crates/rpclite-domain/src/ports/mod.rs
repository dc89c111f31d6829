//! Domain Port Interfaces
//!
//! Capability contracts that swappable implementations fulfil. Concrete
//! implementations live in `rpclite-providers` and are selected by key
//! through the plugin registry in `rpclite-application`.

/// Capability provider ports
pub mod providers;

pub use providers::{Codec, ServiceRegistry, Transport};
