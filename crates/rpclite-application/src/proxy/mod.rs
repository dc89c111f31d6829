//! Call interception
//!
//! A typed client stub forwards every method call to a [`ServiceHandle`],
//! which hands it to a [`MethodInvoker`]: either the live
//! [`InvocationProxy`] or the offline [`MockInvocationProxy`]. The
//! [`ProxyFactory`] is the only place that chooses between them.

pub mod factory;
pub mod handle;
pub mod mock_proxy;
pub mod selector;
pub mod service_proxy;

pub use factory::ProxyFactory;
pub use handle::{MethodInvoker, ServiceHandle, ServiceStub};
pub use mock_proxy::MockInvocationProxy;
pub use selector::{FirstProviderSelector, ProviderSelector};
pub use service_proxy::InvocationProxy;
