//! Live invoker
//!
//! Per call:
//! 1. resolve the configured codec
//! 2. build and serialize the request envelope
//! 3. discover providers for `service_name:DEFAULT_SERVICE_VERSION`
//! 4. select one, send the bytes through the configured transport
//! 5. deserialize the response envelope and unwrap it
//!
//! Discovery results are not cached; every call queries the registry.

use std::sync::Arc;

use rpclite_domain::constants::DEFAULT_SERVICE_VERSION;
use rpclite_domain::error::{Error, Result};
use rpclite_domain::value_objects::{MethodDescriptor, RpcRequest, ServiceMetaInfo, Value};
use tracing::{debug, warn};

use super::handle::MethodInvoker;
use super::selector::ProviderSelector;
use crate::context::ApplicationContext;
use crate::plugin::{CodecCapability, ServiceRegistryCapability, TransportCapability};

/// Invoker that performs the remote call
pub struct InvocationProxy {
    context: Arc<ApplicationContext>,
    selector: Arc<dyn ProviderSelector>,
}

impl InvocationProxy {
    /// Create a live invoker
    pub fn new(context: Arc<ApplicationContext>, selector: Arc<dyn ProviderSelector>) -> Self {
        Self { context, selector }
    }
}

impl MethodInvoker for InvocationProxy {
    fn invoke(
        &self,
        service_name: &str,
        method: &MethodDescriptor,
        args: Vec<Value>,
    ) -> Result<Value> {
        let config = self.context.config()?;
        let plugins = self.context.plugins();

        let codec = plugins.get_instance::<CodecCapability>(&config.codec)?;
        let request = RpcRequest::new(
            service_name,
            &*method.name,
            method.parameter_types.to_vec(),
            args,
        )?;
        let body = codec.serialize_request(&request)?;

        let registry =
            plugins.get_instance::<ServiceRegistryCapability>(&config.registry.registry)?;
        let service_key = ServiceMetaInfo::key_for(service_name, DEFAULT_SERVICE_VERSION);
        let providers = registry.service_discovery(&service_key)?;
        let Some(selected) = self.selector.select(&service_key, &providers) else {
            warn!(service_key = %service_key, "No provider available");
            return Err(Error::service_unavailable(service_key));
        };

        let address = selected.service_address();
        debug!(
            service_key = %service_key,
            method = %method.name,
            address = %address,
            codec = codec.codec_name(),
            bytes = body.len(),
            "Sending request"
        );

        let transport = plugins.get_instance::<TransportCapability>(&config.transport)?;
        let reply = transport.send(&address, &body).inspect_err(|e| {
            warn!(address = %address, error = %e, "Transport failed");
        })?;

        let response = codec.deserialize_response(&reply)?;
        debug!(
            service_key = %service_key,
            method = %method.name,
            bytes = reply.len(),
            remote_error = response.error.is_some(),
            "Response decoded"
        );
        response.into_result().inspect_err(|e| {
            warn!(service_key = %service_key, method = %method.name, error = %e, "Remote call failed");
        })
    }
}
