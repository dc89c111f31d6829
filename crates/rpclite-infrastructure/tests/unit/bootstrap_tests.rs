//! Runtime composition tests

use rpclite_application::plugin::{CodecCapability, ServiceRegistryCapability};
use rpclite_domain::error::Error;
use rpclite_domain::value_objects::RpcConfig;
use rpclite_infrastructure::RpcRuntime;
use tempfile::TempDir;

#[test]
fn test_runtime_loads_shipped_implementations() {
    let runtime = RpcRuntime::builder()
        .config(RpcConfig::default())
        .build()
        .unwrap();

    assert!(runtime.context().is_initialized());
    let codec = runtime
        .plugins()
        .get_instance::<CodecCapability>("json")
        .unwrap();
    assert_eq!(codec.codec_name(), "json");
    let registry = runtime
        .plugins()
        .get_instance::<ServiceRegistryCapability>("memory")
        .unwrap();
    assert_eq!(registry.registry_name(), "memory");
}

#[test]
fn test_custom_dir_overrides_system_descriptor() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("rpclite.codec.Codec"),
        "json=rpclite.codec.BincodeCodec\n",
    )
    .unwrap();

    let runtime = RpcRuntime::builder()
        .custom_dir(dir.path())
        .config(RpcConfig::default())
        .build()
        .unwrap();

    let codec = runtime
        .plugins()
        .get_instance::<CodecCapability>("json")
        .unwrap();
    assert_eq!(codec.codec_name(), "bincode");
}

#[test]
fn test_explicit_config_with_unknown_registry_fails_build() {
    let mut config = RpcConfig::default();
    config.registry.registry = "zookeeper".to_string();

    let err = RpcRuntime::builder().config(config).build().unwrap_err();
    assert!(matches!(err, Error::UnknownKey { ref key, .. } if key == "zookeeper"));
}

#[test]
fn test_config_file_is_loaded_lazily() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rpclite.toml");
    std::fs::write(&path, "[rpc]\nname = \"lazy\"\nmock = true\n").unwrap();

    let runtime = RpcRuntime::builder().config_path(&path).build().unwrap();
    assert!(!runtime.context().is_initialized());

    let config = runtime.config().unwrap();
    assert_eq!(config.name, "lazy");
    assert!(config.mock);
    assert!(runtime.context().is_initialized());
}

#[test]
fn test_invalid_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rpclite.toml");
    std::fs::write(&path, "[rpc]\nserver_port = 0\n").unwrap();

    let runtime = RpcRuntime::builder().config_path(&path).build().unwrap();
    assert_eq!(*runtime.config().unwrap(), RpcConfig::default());
}
