//! Request and response envelopes
//!
//! The envelope is the structured payload exchanged between client and
//! provider, independent of the codec that puts it on the wire.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::value::{TypeDescriptor, Value};

/// Static signature of one service method
///
/// Const-constructible so stubs can declare their method tables as
/// `static` slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name
    pub name: Cow<'static, str>,
    /// Declared parameter types, in order
    pub parameter_types: Cow<'static, [TypeDescriptor]>,
    /// Declared return type
    pub return_type: TypeDescriptor,
}

impl MethodDescriptor {
    /// Create a descriptor from static parts
    pub const fn new(
        name: &'static str,
        parameter_types: &'static [TypeDescriptor],
        return_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            parameter_types: Cow::Borrowed(parameter_types),
            return_type,
        }
    }

    /// Create a descriptor built at runtime
    pub fn dynamic(
        name: impl Into<String>,
        parameter_types: Vec<TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            parameter_types: Cow::Owned(parameter_types),
            return_type,
        }
    }
}

/// Request envelope identifying exactly one remote call
///
/// Immutable once built; `args` and `parameter_types` always have the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRpcRequest")]
pub struct RpcRequest {
    service_name: String,
    method_name: String,
    parameter_types: Vec<TypeDescriptor>,
    args: Vec<Value>,
}

#[derive(Deserialize)]
struct RawRpcRequest {
    service_name: String,
    method_name: String,
    parameter_types: Vec<TypeDescriptor>,
    args: Vec<Value>,
}

impl TryFrom<RawRpcRequest> for RpcRequest {
    type Error = Error;

    fn try_from(raw: RawRpcRequest) -> Result<Self> {
        Self::new(raw.service_name, raw.method_name, raw.parameter_types, raw.args)
    }
}

impl RpcRequest {
    /// Build a request, rejecting mismatched argument counts
    pub fn new(
        service_name: impl Into<String>,
        method_name: impl Into<String>,
        parameter_types: Vec<TypeDescriptor>,
        args: Vec<Value>,
    ) -> Result<Self> {
        let method_name = method_name.into();
        if args.len() != parameter_types.len() {
            return Err(Error::invalid_argument(format!(
                "method {method_name} declares {} parameters but was called with {} arguments",
                parameter_types.len(),
                args.len()
            )));
        }
        Ok(Self {
            service_name: service_name.into(),
            method_name,
            parameter_types,
            args,
        })
    }

    /// Qualified name of the declaring service
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Invoked method name
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Declared parameter types
    pub fn parameter_types(&self) -> &[TypeDescriptor] {
        &self.parameter_types
    }

    /// Argument values
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// Response envelope produced by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Returned value, absent for unit methods or on failure
    pub data: Option<Value>,
    /// Declared type of `data`
    pub data_type: TypeDescriptor,
    /// Informational message
    pub message: Option<String>,
    /// Remote error description, present when the call failed on the provider
    pub error: Option<String>,
}

impl RpcResponse {
    /// Successful response carrying `data`
    pub fn success(data: Value, data_type: TypeDescriptor) -> Self {
        Self {
            data: Some(data),
            data_type,
            message: Some("ok".to_string()),
            error: None,
        }
    }

    /// Failed response carrying a remote error description
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            data: None,
            data_type: TypeDescriptor::Unit,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Unwrap into the returned value or a remote execution error
    pub fn into_result(self) -> Result<Value> {
        match self.error {
            Some(message) => Err(Error::remote_execution(message)),
            None => Ok(self.data.unwrap_or_default()),
        }
    }
}
