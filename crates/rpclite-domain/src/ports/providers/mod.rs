//! Capability Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Codec`] | Envelope serialization |
//! | [`ServiceRegistry`] | Service registration and discovery |
//! | [`Transport`] | Byte-in/byte-out exchange with a provider |
//!
//! All ports are `Send + Sync`: one instance is shared by every invocation
//! thread for the lifetime of the process.

/// Codec port
pub mod codec;
/// Service registry port
pub mod service_registry;
/// Transport port
pub mod transport;

pub use codec::Codec;
pub use service_registry::ServiceRegistry;
pub use transport::Transport;
