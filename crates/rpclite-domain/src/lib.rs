//! # rpclite domain
//!
//! Core types shared by every layer of the RPC framework.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and the crate-wide `Result` alias |
//! | [`value_objects`] | Envelopes, dynamic values, service metadata and configuration |
//! | [`ports`] | Capability contracts: codec, service registry, transport |
//! | [`constants`] | Framework-wide defaults |
//!
//! This crate has no knowledge of concrete implementations. Codecs,
//! registry backends and transports live in `rpclite-providers` and are
//! selected at runtime by key through the plugin registry.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::{Codec, ServiceRegistry, Transport};
pub use value_objects::{
    FromValue, IntoValue, MethodDescriptor, RegistryConfig, RpcConfig, RpcRequest, RpcResponse,
    ServiceMetaInfo, TypeDescriptor, Value,
};
