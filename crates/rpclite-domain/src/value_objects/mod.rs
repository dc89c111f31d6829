//! Domain Value Objects
//!
//! Immutable value objects exchanged between the invocation layer,
//! capability implementations and configuration.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Value`] | Codec-neutral dynamic argument/return value |
//! | [`TypeDescriptor`] | Declared type of a parameter or return value |
//! | [`RpcRequest`] | Request envelope identifying exactly one remote call |
//! | [`RpcResponse`] | Response envelope produced by a provider |
//! | [`MethodDescriptor`] | Static signature of one service method |
//! | [`ServiceMetaInfo`] | Address of one provider replica |
//! | [`RpcConfig`] | Process-wide framework configuration |

/// Framework configuration value objects
pub mod config;
/// Request/response envelopes and method signatures
pub mod envelope;
/// Service metadata
pub mod service;
/// Dynamic values and type descriptors
pub mod value;

pub use config::{RegistryConfig, RpcConfig};
pub use envelope::{MethodDescriptor, RpcRequest, RpcResponse};
pub use service::ServiceMetaInfo;
pub use value::{FromValue, IntoValue, TypeDescriptor, Value};
