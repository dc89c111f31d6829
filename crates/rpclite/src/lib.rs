//! # rpclite
//!
//! A minimal RPC framework. Client code calls a service through a typed stub;
//! the stub turns each call into a request envelope, discovers a provider
//! through the configured service registry, sends the serialized envelope
//! over the configured transport and decodes the reply. Codecs, registries
//! and transports are resolved by key through layered descriptor resources,
//! so deployments swap them without recompiling.
//!
//! ## Example
//!
//! ```ignore
//! use rpclite::{IntoValue, MethodDescriptor, Result, RpcRuntime, ServiceHandle, ServiceStub, TypeDescriptor};
//!
//! static GREETER_METHODS: [MethodDescriptor; 1] =
//!     [MethodDescriptor::new("greet", &[TypeDescriptor::String], TypeDescriptor::String)];
//!
//! struct GreeterStub(ServiceHandle);
//!
//! impl ServiceStub for GreeterStub {
//!     const SERVICE_NAME: &'static str = "demo.Greeter";
//!     fn methods() -> &'static [MethodDescriptor] { &GREETER_METHODS }
//!     fn from_handle(handle: ServiceHandle) -> Self { Self(handle) }
//! }
//!
//! impl GreeterStub {
//!     fn greet(&self, name: &str) -> Result<String> {
//!         self.0.call("greet", vec![name.into_value()])
//!     }
//! }
//!
//! let runtime = RpcRuntime::builder().build()?;
//! let greeter: GreeterStub = runtime.get_proxy()?;
//! println!("{}", greeter.greet("ada")?);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - envelopes, values, service metadata, configuration, errors, capability ports
//! - `application` - plugin registry, application context, proxies and the proxy factory
//! - `infrastructure` - configuration loading, logging, runtime composition
//! - `providers` - shipped codecs, registry backends and transports

/// Domain layer - core types and capability ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rpclite_domain::*;
}

/// Application layer - plugin resolution and call interception
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use rpclite_application::*;
}

/// Infrastructure layer - config, logging and composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rpclite_infrastructure::*;
}

/// Shipped capability implementations
pub mod providers {
    pub use rpclite_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{
    ApplicationContext, FirstProviderSelector, MockInvocationProxy, PluginRegistry,
    ProviderSelector, ProxyFactory, ServiceHandle, ServiceStub,
};
pub use infrastructure::{RpcRuntime, RpcRuntimeBuilder};
