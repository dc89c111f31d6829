//! # rpclite - Capability Implementations
//!
//! Every implementation registers itself into the linkme registry of its
//! capability and is listed in the system-tier descriptor resources under
//! `descriptors/system/`.
//!
//! | Capability | Key | Implementation |
//! |------------|-----|----------------|
//! | Codec | `json` | [`codec::JsonCodec`] |
//! | Codec | `bincode` | [`codec::BincodeCodec`] |
//! | ServiceRegistry | `memory` | [`registry::MemoryServiceRegistry`] |
//! | ServiceRegistry | `static` | [`registry::StaticServiceRegistry`] |
//! | Transport | `http` | [`transport::HttpTransport`] |
//!
//! Binaries must link this crate (`extern crate rpclite_providers;`) for the
//! registrations to be collected.

pub use rpclite_domain::error::{Error, Result};
pub use rpclite_domain::ports::providers::{Codec, ServiceRegistry, Transport};

/// Envelope codecs
pub mod codec;

/// Service registry backends
pub mod registry;

/// Transports
pub mod transport;

/// System-tier descriptor resources
mod descriptors;
