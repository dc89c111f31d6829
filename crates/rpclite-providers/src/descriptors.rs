//! Embedded system-tier descriptors

use rpclite_application::plugin::{
    Capability, CodecCapability, ServiceRegistryCapability, TransportCapability,
};
use rpclite_application::ports::registry::{DescriptorResource, SYSTEM_DESCRIPTORS};

#[linkme::distributed_slice(SYSTEM_DESCRIPTORS)]
static CODEC_DESCRIPTORS: DescriptorResource = DescriptorResource {
    capability: CodecCapability::TYPE_NAME,
    origin: "rpclite-providers/descriptors/system/rpclite.codec.Codec",
    content: include_str!("../descriptors/system/rpclite.codec.Codec"),
};

#[linkme::distributed_slice(SYSTEM_DESCRIPTORS)]
static REGISTRY_DESCRIPTORS: DescriptorResource = DescriptorResource {
    capability: ServiceRegistryCapability::TYPE_NAME,
    origin: "rpclite-providers/descriptors/system/rpclite.registry.ServiceRegistry",
    content: include_str!("../descriptors/system/rpclite.registry.ServiceRegistry"),
};

#[linkme::distributed_slice(SYSTEM_DESCRIPTORS)]
static TRANSPORT_DESCRIPTORS: DescriptorResource = DescriptorResource {
    capability: TransportCapability::TYPE_NAME,
    origin: "rpclite-providers/descriptors/system/rpclite.transport.Transport",
    content: include_str!("../descriptors/system/rpclite.transport.Transport"),
};
