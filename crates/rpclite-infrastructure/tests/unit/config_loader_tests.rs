//! Configuration Loader Tests

use std::env;

use rpclite_application::ports::infrastructure::ConfigSource;
use rpclite_domain::error::Error;
use rpclite_domain::value_objects::RpcConfig;
use rpclite_infrastructure::config::{AppConfig, ConfigLoader};
use rpclite_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rpclite.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("RPCLITE_TEST_ABSENT")
        .load()
        .unwrap();

    assert_eq!(config.rpc, RpcConfig::default());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_file_values_override_defaults() {
    let (_dir, path) = write_config(
        r#"
[rpc]
name = "orders"
codec = "bincode"
mock = true

[rpc.registry]
registry = "static"
address = "10.0.0.5:9000"
username = "svc"

[logging]
level = "debug"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RPCLITE_TEST_FILE")
        .load()
        .unwrap();

    assert_eq!(config.rpc.name, "orders");
    assert_eq!(config.rpc.codec, "bincode");
    assert!(config.rpc.mock);
    assert_eq!(config.rpc.registry.registry, "static");
    assert_eq!(config.rpc.registry.address, "10.0.0.5:9000");
    assert_eq!(config.rpc.registry.username.as_deref(), Some("svc"));
    assert!(config.rpc.registry.credentials().is_none());
    // Untouched keys keep their defaults
    assert_eq!(config.rpc.transport, "http");
    assert_eq!(config.rpc.server_port, 8080);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_environment_overrides_file() {
    let (_dir, path) = write_config("[rpc]\ncodec = \"bincode\"\n");
    // SAFETY: this prefix is only read by this test
    unsafe {
        env::set_var("RPCLITE_TEST_ENV__RPC__CODEC", "json");
        env::set_var("RPCLITE_TEST_ENV__RPC__SERVER_PORT", "9100");
    }

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RPCLITE_TEST_ENV")
        .load();

    // SAFETY: see above
    unsafe {
        env::remove_var("RPCLITE_TEST_ENV__RPC__CODEC");
        env::remove_var("RPCLITE_TEST_ENV__RPC__SERVER_PORT");
    }

    let config = config.unwrap();
    assert_eq!(config.rpc.codec, "json");
    assert_eq!(config.rpc.server_port, 9100);
}

#[test]
fn test_validation_rejects_invalid_values() {
    let cases = [
        "[rpc]\ncodec = \"\"\n",
        "[rpc]\ntransport = \"  \"\n",
        "[rpc]\nserver_port = 0\n",
        "[rpc.registry]\nregistry = \"\"\n",
        "[logging]\nlevel = \"loud\"\n",
    ];
    for contents in cases {
        let (_dir, path) = write_config(contents);
        let result = ConfigLoader::new()
            .with_config_path(&path)
            .with_env_prefix("RPCLITE_TEST_INVALID")
            .load();
        assert!(
            matches!(result, Err(Error::Configuration { .. })),
            "{contents:?} should be rejected"
        );
    }
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let (_dir, path) = write_config("[rpc\ncodec = ");
    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RPCLITE_TEST_MALFORMED")
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut original = AppConfig::default();
    original.rpc.name = "billing".to_string();
    original.rpc.registry.password = Some("secret".to_string());
    original.logging.json_format = true;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RPCLITE_TEST_SAVE");
    loader.save_to_file(&original, &path).unwrap();

    assert_eq!(loader.load().unwrap(), original);
}

#[test]
fn test_loader_is_a_config_source() {
    let (_dir, path) = write_config("[rpc]\nname = \"from-file\"\n");
    let source = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("RPCLITE_TEST_SOURCE");

    assert_eq!(source.load_rpc_config().unwrap().name, "from-file");
}

#[test]
fn test_save_into_missing_directory_is_infrastructure_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("rpclite.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert!(message.starts_with("Failed to write config file"), "{message}");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}
