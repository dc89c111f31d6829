//! Shipped implementations are reachable through the system tier

use rpclite_application::plugin::{
    CodecCapability, PluginRegistry, ServiceRegistryCapability, TransportCapability,
};

#[test]
fn test_default_keys_resolve_to_shipped_implementations() {
    let registry = PluginRegistry::default();
    registry.load_all();

    let codec = registry.get_instance::<CodecCapability>("json").unwrap();
    assert_eq!(codec.codec_name(), "json");

    let binary = registry.get_instance::<CodecCapability>("bincode").unwrap();
    assert_eq!(binary.codec_name(), "bincode");

    let backend = registry
        .get_instance::<ServiceRegistryCapability>("memory")
        .unwrap();
    assert_eq!(backend.registry_name(), "memory");

    let fixed = registry
        .get_instance::<ServiceRegistryCapability>("static")
        .unwrap();
    assert_eq!(fixed.registry_name(), "static");

    let transport = registry.get_instance::<TransportCapability>("http").unwrap();
    assert_eq!(transport.transport_name(), "http");
}

#[test]
fn test_system_mapping_lists_every_shipped_key() {
    let registry = PluginRegistry::default();
    let codecs = registry.load::<CodecCapability>();
    assert_eq!(
        codecs.get("json").map(String::as_str),
        Some(rpclite_providers::codec::json::JSON_CODEC_ID)
    );
    assert_eq!(
        codecs.get("bincode").map(String::as_str),
        Some(rpclite_providers::codec::bincode::BINCODE_CODEC_ID)
    );
}
