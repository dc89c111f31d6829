//! Application Layer - rpclite
//!
//! Client-side invocation pipeline and the pluggable-component resolution
//! it relies on.
//!
//! ## Architecture
//!
//! ```text
//! ProxyFactory ──► InvocationProxy | MockInvocationProxy
//!                        │
//!                        ▼
//!                ApplicationContext ──► PluginRegistry ──► Codec / ServiceRegistry / Transport
//! ```
//!
//! ## Modules
//!
//! - `ports::registry`: compile-time implementation tables (linkme slices)
//! - `ports::infrastructure`: configuration source port
//! - `plugin`: descriptor loading and singleton instance cache
//! - `context`: lazily initialized, process-wide configuration holder
//! - `proxy`: call interception, stubs and provider selection

pub mod context;
pub mod plugin;
pub mod ports;
pub mod proxy;

pub use context::ApplicationContext;
pub use plugin::{
    Capability, CodecCapability, DescriptorRoot, DescriptorTier, PluginRegistry,
    ServiceRegistryCapability, TransportCapability,
};
pub use ports::infrastructure::ConfigSource;
pub use proxy::{
    FirstProviderSelector, InvocationProxy, MethodInvoker, MockInvocationProxy,
    ProviderSelector, ProxyFactory, ServiceHandle, ServiceStub,
};
