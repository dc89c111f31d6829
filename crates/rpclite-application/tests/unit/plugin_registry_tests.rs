//! Plugin registry tests

use std::sync::Arc;
use std::thread;

use rpclite_application::plugin::{
    Capability, CodecCapability, DescriptorRoot, PluginRegistry, ServiceRegistryCapability,
    TransportCapability,
};
use rpclite_domain::error::Error;

use crate::support::{DUAL_IDENTIFIER, descriptor_dir, fake_descriptors, fake_plugins};

#[test]
fn test_get_instance_before_load_is_capability_not_loaded() {
    let plugins = PluginRegistry::default();
    let err = plugins
        .get_instance::<CodecCapability>("json")
        .err()
        .expect("json resolved before load");
    assert!(matches!(
        err,
        Error::CapabilityNotLoaded { ref capability } if capability == CodecCapability::TYPE_NAME
    ));
}

#[test]
fn test_unmapped_key_is_unknown_key() {
    let dir = fake_descriptors();
    let plugins = fake_plugins(&dir);
    let err = plugins
        .get_instance::<CodecCapability>("nope")
        .err()
        .expect("unmapped key resolved");
    assert!(matches!(err, Error::UnknownKey { ref key, .. } if key == "nope"));
}

#[test]
fn test_descriptor_naming_unregistered_implementation_is_skipped() {
    let dir = fake_descriptors();
    let plugins = fake_plugins(&dir);

    let mapping = plugins.list_loaded::<CodecCapability>().unwrap();
    assert!(!mapping.contains_key("ghost"));
    assert!(matches!(
        plugins.get_instance::<CodecCapability>("ghost"),
        Err(Error::UnknownKey { .. })
    ));
}

#[test]
fn test_failing_factory_is_instantiation_error_and_not_cached() {
    let dir = fake_descriptors();
    let plugins = fake_plugins(&dir);

    for _ in 0..2 {
        let err = plugins
            .get_instance::<CodecCapability>("broken")
            .err()
            .expect("broken factory produced an instance");
        assert!(matches!(
            err,
            Error::Instantiation { ref implementation, ref message }
                if implementation == "test.codec.Broken" && message == "constructor refused"
        ));
    }
    assert_eq!(plugins.instance_count(), 0);
}

#[test]
fn test_repeated_resolution_returns_same_instance() {
    let dir = fake_descriptors();
    let plugins = fake_plugins(&dir);

    let first = plugins.get_instance::<TransportCapability>("fake").unwrap();
    let second = plugins.get_instance::<TransportCapability>("fake").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(plugins.instance_count(), 1);
}

#[test]
fn test_keys_sharing_an_implementation_share_the_instance() {
    let dir = descriptor_dir(&[(
        CodecCapability::TYPE_NAME,
        "fake=test.codec.FakeJson\nalias=test.codec.FakeJson\n",
    )]);
    let plugins = PluginRegistry::with_custom_dirs([dir.path()]);
    plugins.load::<CodecCapability>();

    let a = plugins.get_instance::<CodecCapability>("fake").unwrap();
    let b = plugins.get_instance::<CodecCapability>("alias").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_identifier_cached_for_another_capability_is_instantiation_error() {
    let dir = descriptor_dir(&[
        (CodecCapability::TYPE_NAME, "dual=test.shared.Dual\n"),
        (TransportCapability::TYPE_NAME, "dual=test.shared.Dual\n"),
    ]);
    let plugins = PluginRegistry::with_custom_dirs([dir.path()]);
    plugins.load_all();

    let codec = plugins.get_instance::<CodecCapability>("dual").unwrap();
    assert_eq!(codec.codec_name(), "dual");

    let err = plugins
        .get_instance::<TransportCapability>("dual")
        .err()
        .expect("codec instance handed out as a transport");
    assert!(matches!(
        err,
        Error::Instantiation { ref implementation, .. } if implementation == DUAL_IDENTIFIER
    ));
    assert_eq!(plugins.instance_count(), 1);
}

#[test]
fn test_custom_tier_overrides_system_tier() {
    let system = descriptor_dir(&[(CodecCapability::TYPE_NAME, "fake=test.codec.FakeJson\n")]);
    let custom = descriptor_dir(&[(CodecCapability::TYPE_NAME, "fake=test.codec.Alt\n")]);

    // Custom listed first: scan order still follows the tier.
    let plugins = PluginRegistry::new(vec![
        DescriptorRoot::custom(custom.path()),
        DescriptorRoot::system(system.path()),
    ]);
    let mapping = plugins.load::<CodecCapability>();

    assert_eq!(mapping.get("fake").map(String::as_str), Some("test.codec.Alt"));
    let codec = plugins.get_instance::<CodecCapability>("fake").unwrap();
    assert_eq!(codec.codec_name(), "alt");
}

#[test]
fn test_missing_descriptor_file_yields_empty_mapping() {
    let dir = descriptor_dir(&[]);
    let plugins = PluginRegistry::with_custom_dirs([dir.path()]);
    let mapping = plugins.load::<ServiceRegistryCapability>();

    assert!(mapping.is_empty());
    assert!(plugins.is_loaded::<ServiceRegistryCapability>());
    assert!(!plugins.is_loaded::<TransportCapability>());
}

#[test]
fn test_reload_replaces_previous_mapping() {
    let dir = descriptor_dir(&[(CodecCapability::TYPE_NAME, "fake=test.codec.FakeJson\n")]);
    let plugins = PluginRegistry::with_custom_dirs([dir.path()]);
    plugins.load::<CodecCapability>();

    std::fs::write(
        dir.path().join(CodecCapability::TYPE_NAME),
        "other=test.codec.Alt\n",
    )
    .unwrap();
    let mapping = plugins.load::<CodecCapability>();

    assert!(!mapping.contains_key("fake"));
    assert!(mapping.contains_key("other"));
}

#[test]
fn test_concurrent_first_resolution_constructs_one_instance() {
    let dir = fake_descriptors();
    let plugins = fake_plugins(&dir);

    let instances: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| plugins.get_instance::<ServiceRegistryCapability>("fake")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    assert!(instances.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(plugins.instance_count(), 1);
}
