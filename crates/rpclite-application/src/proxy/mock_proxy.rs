//! Offline invoker

use rpclite_domain::error::Result;
use rpclite_domain::value_objects::{MethodDescriptor, Value};
use tracing::info;

use super::handle::MethodInvoker;

/// Answers every call with the zero value of the declared return type
///
/// Never touches the network, the registry or the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockInvocationProxy;

impl MethodInvoker for MockInvocationProxy {
    fn invoke(
        &self,
        service_name: &str,
        method: &MethodDescriptor,
        _args: Vec<Value>,
    ) -> Result<Value> {
        info!(service = service_name, method = %method.name, "mock invoke");
        Ok(method.return_type.default_value())
    }
}
