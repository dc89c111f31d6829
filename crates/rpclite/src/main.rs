//! rpclite - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rpclite plugins` | Registered implementations and resolved descriptor mappings |
//! | `rpclite config` | Effective framework configuration as TOML |
//! | `rpclite call <service> <method> [json-args...]` | Dynamic invocation |

// Force-link rpclite-providers to ensure linkme registrations are included
extern crate rpclite_providers;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rpclite_application::plugin::{
    Capability, CodecCapability, PluginRegistry, ServiceRegistryCapability, TransportCapability,
};
use rpclite_application::ports::registry::{
    list_codec_providers, list_service_registry_providers, list_transport_providers,
};
use rpclite_domain::value_objects::{MethodDescriptor, RpcConfig, TypeDescriptor, Value};
use rpclite_infrastructure::logging::init_logging;
use rpclite_infrastructure::{ConfigLoader, RpcRuntime};

/// Command line interface for rpclite
#[derive(Parser, Debug)]
#[command(name = "rpclite")]
#[command(about = "rpclite - minimal RPC client runtime")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Custom descriptor directory (repeatable, later directories win)
    #[arg(long = "custom-dir")]
    pub custom_dirs: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered implementations and resolved descriptor mappings
    Plugins,
    /// Print the effective framework configuration as TOML
    Config,
    /// Invoke a remote method with JSON arguments
    Call {
        /// Qualified service name
        service: String,
        /// Method name
        method: String,
        /// Arguments, one JSON document each
        args: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let logging = loader.load().map(|app| app.logging).unwrap_or_default();
    init_logging(&logging)?;

    let mut builder = RpcRuntime::builder();
    if let Some(path) = &cli.config {
        builder = builder.config_path(path);
    }
    for dir in &cli.custom_dirs {
        builder = builder.custom_dir(dir);
    }
    let runtime = builder.build()?;

    match cli.command {
        Command::Plugins => print_plugins(runtime.plugins()),
        Command::Config => {
            let config = runtime.config()?;
            print_config(&config)?;
        }
        Command::Call {
            service,
            method,
            args,
        } => call(&runtime, service, method, &args)?,
    }
    Ok(())
}

fn print_plugins(plugins: &PluginRegistry) {
    let registered = [
        (CodecCapability::TYPE_NAME, list_codec_providers()),
        (ServiceRegistryCapability::TYPE_NAME, list_service_registry_providers()),
        (TransportCapability::TYPE_NAME, list_transport_providers()),
    ];
    let mappings = [
        (CodecCapability::TYPE_NAME, plugins.list_loaded::<CodecCapability>()),
        (
            ServiceRegistryCapability::TYPE_NAME,
            plugins.list_loaded::<ServiceRegistryCapability>(),
        ),
        (TransportCapability::TYPE_NAME, plugins.list_loaded::<TransportCapability>()),
    ];

    for ((capability, mut implementations), (_, mapping)) in registered.into_iter().zip(mappings) {
        println!("{capability}");
        implementations.sort_unstable();
        for (name, description) in implementations {
            println!("  impl {name:<40} {description}");
        }
        let sorted: BTreeMap<_, _> = mapping.unwrap_or_default().into_iter().collect();
        for (key, implementation) in sorted {
            println!("  key  {key:<40} -> {implementation}");
        }
    }
}

fn print_config(config: &RpcConfig) -> anyhow::Result<()> {
    let mut shown = config.clone();
    if shown.registry.password.is_some() {
        shown.registry.password = Some("********".to_string());
    }
    print!(
        "{}",
        toml::to_string_pretty(&shown).context("Failed to render configuration")?
    );
    Ok(())
}

fn call(
    runtime: &RpcRuntime,
    service: String,
    method: String,
    raw_args: &[String],
) -> anyhow::Result<()> {
    let args = raw_args
        .iter()
        .map(|raw| {
            serde_json::from_str::<serde_json::Value>(raw)
                .map(Value::from)
                .with_context(|| format!("Argument is not valid JSON: {raw}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let descriptor = MethodDescriptor::dynamic(
        method,
        args.iter().map(Value::inferred_type).collect(),
        TypeDescriptor::object("json"),
    );
    let handle = runtime
        .proxy_factory()
        .get_handle(service, vec![descriptor.clone()])?;
    let result = handle.invoke(&descriptor, args)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::from(result))?
    );
    Ok(())
}
