//! Infrastructure Layer - rpclite
//!
//! Cross-cutting technical concerns: configuration loading, logging, error
//! context helpers and the composition root that wires the application
//! layer to the shipped implementations.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based loader for `AppConfig` |
//! | [`logging`] | `tracing-subscriber` initialization |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | `RpcRuntime` composition root |
//! | [`constants`] | File names, prefixes and defaults |

// Force-link rpclite-providers so its linkme registrations are collected
extern crate rpclite_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{RpcRuntime, RpcRuntimeBuilder};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
