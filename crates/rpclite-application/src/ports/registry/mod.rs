//! Implementation Registry System
//!
//! Compile-time registration of capability implementations. Each
//! implementation contributes a [`ProviderEntry`] to the distributed slice of
//! its capability; descriptor resources then map configuration keys to the
//! entry's `name` (its implementation identifier).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Implementation Registration Flow               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(CODECS)]     │
//! │                        static ENTRY: CodecProviderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Descriptor maps:   json=rpclite.codec.JsonCodec             │
//! │                              ↓                                  │
//! │  3. PluginRegistry:    key "json" → identifier → factory()      │
//! │                              ↓                                  │
//! │  4. Cached singleton:  Arc<dyn Codec>                           │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering an implementation
//!
//! ```ignore
//! use rpclite_application::ports::registry::{CodecProviderEntry, CODEC_PROVIDERS};
//!
//! #[linkme::distributed_slice(CODEC_PROVIDERS)]
//! static JSON_CODEC: CodecProviderEntry = CodecProviderEntry {
//!     name: "rpclite.codec.JsonCodec",
//!     description: "JSON envelope codec",
//!     factory: || Ok(Arc::new(JsonCodec::new())),
//! };
//! ```

pub mod codec;
pub mod descriptor;
pub mod service_registry;
pub mod transport;

pub use codec::{CODEC_PROVIDERS, CodecProviderEntry, list_codec_providers};
pub use descriptor::{DescriptorResource, SYSTEM_DESCRIPTORS};
pub use service_registry::{
    SERVICE_REGISTRY_PROVIDERS, ServiceRegistryProviderEntry, list_service_registry_providers,
};
pub use transport::{TRANSPORT_PROVIDERS, TransportProviderEntry, list_transport_providers};

use std::sync::Arc;

/// Registry entry for one capability implementation
///
/// `factory` is the implementation's default construction: it takes no
/// arguments and is called at most once per plugin registry.
pub struct ProviderEntry<T: ?Sized + 'static> {
    /// Implementation identifier referenced by descriptor resources
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the instance
    pub factory: fn() -> Result<Arc<T>, String>,
}

/// Find the entry registered under an implementation identifier
pub fn find_provider<'a, T: ?Sized + 'static>(
    entries: &'a [ProviderEntry<T>],
    name: &str,
) -> Option<&'a ProviderEntry<T>> {
    entries.iter().find(|entry| entry.name == name)
}

/// (identifier, description) pairs for a slice of entries
pub fn describe_providers<T: ?Sized + 'static>(
    entries: &[ProviderEntry<T>],
) -> Vec<(&'static str, &'static str)> {
    entries.iter().map(|e| (e.name, e.description)).collect()
}
