//! Proxy factory

use std::borrow::Cow;
use std::sync::Arc;

use rpclite_domain::error::Result;
use rpclite_domain::value_objects::MethodDescriptor;

use super::handle::{MethodInvoker, ServiceHandle, ServiceStub};
use super::mock_proxy::MockInvocationProxy;
use super::selector::{FirstProviderSelector, ProviderSelector};
use super::service_proxy::InvocationProxy;
use crate::context::ApplicationContext;

/// Produces client stubs bound to the invoker the configuration selects
#[derive(Clone)]
pub struct ProxyFactory {
    context: Arc<ApplicationContext>,
    selector: Arc<dyn ProviderSelector>,
}

impl ProxyFactory {
    /// Create a factory using the first-provider selection policy
    pub fn new(context: Arc<ApplicationContext>) -> Self {
        Self::with_selector(context, Arc::new(FirstProviderSelector))
    }

    /// Create a factory with a custom provider selection policy
    pub fn with_selector(
        context: Arc<ApplicationContext>,
        selector: Arc<dyn ProviderSelector>,
    ) -> Self {
        Self { context, selector }
    }

    /// Application context the factory reads the mode from
    pub fn context(&self) -> &Arc<ApplicationContext> {
        &self.context
    }

    /// Typed stub for service `S`
    ///
    /// Mock mode binds [`MockInvocationProxy`], otherwise [`InvocationProxy`].
    pub fn get_proxy<S: ServiceStub>(&self) -> Result<S> {
        self.get_handle(S::SERVICE_NAME, S::methods())
            .map(S::from_handle)
    }

    /// Typed stub for service `S` that is always offline
    pub fn get_mock_proxy<S: ServiceStub>(&self) -> S {
        S::from_handle(ServiceHandle::new(
            S::SERVICE_NAME,
            S::methods(),
            Arc::new(MockInvocationProxy),
        ))
    }

    /// Untyped handle for dynamic calls
    pub fn get_handle(
        &self,
        service_name: impl Into<Cow<'static, str>>,
        methods: impl Into<Cow<'static, [MethodDescriptor]>>,
    ) -> Result<ServiceHandle> {
        let config = self.context.config()?;
        let invoker: Arc<dyn MethodInvoker> = if config.mock {
            Arc::new(MockInvocationProxy)
        } else {
            Arc::new(InvocationProxy::new(
                Arc::clone(&self.context),
                Arc::clone(&self.selector),
            ))
        };
        Ok(ServiceHandle::new(service_name, methods, invoker))
    }
}
