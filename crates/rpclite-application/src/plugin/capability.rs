//! Capability marker types

use rpclite_domain::ports::providers::{Codec, ServiceRegistry, Transport};

use crate::ports::registry::{
    CODEC_PROVIDERS, ProviderEntry, SERVICE_REGISTRY_PROVIDERS, TRANSPORT_PROVIDERS,
};

/// An abstract behavior with swappable implementations
///
/// `TYPE_NAME` is the stable, fully qualified name descriptor resources are
/// filed under.
pub trait Capability: 'static {
    /// Trait object handed out by the plugin registry
    type Instance: ?Sized + Send + Sync + 'static;

    /// Fully qualified capability name
    const TYPE_NAME: &'static str;

    /// Implementations registered at compile time
    fn providers() -> &'static [ProviderEntry<Self::Instance>];
}

/// Envelope serialization
#[derive(Debug, Clone, Copy)]
pub struct CodecCapability;

impl Capability for CodecCapability {
    type Instance = dyn Codec;
    const TYPE_NAME: &'static str = "rpclite.codec.Codec";

    fn providers() -> &'static [ProviderEntry<Self::Instance>] {
        CODEC_PROVIDERS.static_slice()
    }
}

/// Service registration and discovery
#[derive(Debug, Clone, Copy)]
pub struct ServiceRegistryCapability;

impl Capability for ServiceRegistryCapability {
    type Instance = dyn ServiceRegistry;
    const TYPE_NAME: &'static str = "rpclite.registry.ServiceRegistry";

    fn providers() -> &'static [ProviderEntry<Self::Instance>] {
        SERVICE_REGISTRY_PROVIDERS.static_slice()
    }
}

/// Byte exchange with providers
#[derive(Debug, Clone, Copy)]
pub struct TransportCapability;

impl Capability for TransportCapability {
    type Instance = dyn Transport;
    const TYPE_NAME: &'static str = "rpclite.transport.Transport";

    fn providers() -> &'static [ProviderEntry<Self::Instance>] {
        TRANSPORT_PROVIDERS.static_slice()
    }
}
