//! Service handles and stubs

use std::borrow::Cow;
use std::sync::Arc;

use rpclite_domain::error::{Error, Result};
use rpclite_domain::value_objects::{FromValue, MethodDescriptor, Value};

/// Turns one intercepted method call into a result value
pub trait MethodInvoker: Send + Sync {
    /// Invoke `method` of `service_name` with `args`
    fn invoke(&self, service_name: &str, method: &MethodDescriptor, args: Vec<Value>)
    -> Result<Value>;
}

/// Client-side handle bound to one service and one invoker
///
/// Stubs hold a handle and forward each trait method to [`ServiceHandle::call`].
#[derive(Clone)]
pub struct ServiceHandle {
    service_name: Cow<'static, str>,
    methods: Cow<'static, [MethodDescriptor]>,
    invoker: Arc<dyn MethodInvoker>,
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("service_name", &self.service_name)
            .field("methods", &self.methods.len())
            .finish_non_exhaustive()
    }
}

impl ServiceHandle {
    /// Bind a service's method table to an invoker
    pub fn new(
        service_name: impl Into<Cow<'static, str>>,
        methods: impl Into<Cow<'static, [MethodDescriptor]>>,
        invoker: Arc<dyn MethodInvoker>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            methods: methods.into(),
            invoker,
        }
    }

    /// Qualified service name
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Declared methods
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Look up a declared method by name
    pub fn method(&self, name: &str) -> Result<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "service {} declares no method {name}",
                self.service_name
            ))
        })
    }

    /// Invoke a method descriptor directly
    pub fn invoke(&self, method: &MethodDescriptor, args: Vec<Value>) -> Result<Value> {
        self.invoker.invoke(&self.service_name, method, args)
    }

    /// Invoke a declared method and convert its result
    pub fn call<R: FromValue>(&self, method: &str, args: Vec<Value>) -> Result<R> {
        let descriptor = self.method(method)?;
        R::from_value(self.invoke(descriptor, args)?)
    }
}

/// A typed client stub for one service interface
///
/// ```ignore
/// trait Calculator {
///     fn add(&self, a: i32, b: i32) -> Result<i32>;
/// }
///
/// static CALCULATOR_METHODS: [MethodDescriptor; 1] = [MethodDescriptor::new(
///     "add",
///     &[TypeDescriptor::I32, TypeDescriptor::I32],
///     TypeDescriptor::I32,
/// )];
///
/// struct CalculatorStub(ServiceHandle);
///
/// impl ServiceStub for CalculatorStub {
///     const SERVICE_NAME: &'static str = "demo.Calculator";
///     fn methods() -> &'static [MethodDescriptor] {
///         &CALCULATOR_METHODS
///     }
///     fn from_handle(handle: ServiceHandle) -> Self {
///         Self(handle)
///     }
/// }
///
/// impl Calculator for CalculatorStub {
///     fn add(&self, a: i32, b: i32) -> Result<i32> {
///         self.0.call("add", vec![a.into_value(), b.into_value()])
///     }
/// }
/// ```
pub trait ServiceStub: Sized {
    /// Qualified service name, used to derive the service key
    const SERVICE_NAME: &'static str;

    /// Method table of the service
    fn methods() -> &'static [MethodDescriptor];

    /// Wrap a bound handle
    fn from_handle(handle: ServiceHandle) -> Self;
}
