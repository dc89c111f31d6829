//! Invocation pipeline tests

use std::sync::Arc;

use rpclite_application::ApplicationContext;
use rpclite_application::ports::infrastructure::FixedConfigSource;
use rpclite_application::proxy::{ProviderSelector, ProxyFactory, ServiceHandle, ServiceStub};
use rpclite_domain::error::{Error, Result};
use rpclite_domain::value_objects::{
    IntoValue, MethodDescriptor, RpcRequest, RpcResponse, ServiceMetaInfo, TypeDescriptor, Value,
};
use tempfile::TempDir;

use crate::support::{
    discovery_calls, fake_config, fake_descriptors, fake_plugins, reset, sent, set_discovered,
    set_reply,
};

trait Calculator {
    fn add(&self, a: i32, b: i32) -> Result<i32>;
    fn is_ready(&self) -> Result<bool>;
    fn describe(&self, id: i64) -> Result<Value>;
}

static CALCULATOR_METHODS: [MethodDescriptor; 3] = [
    MethodDescriptor::new(
        "add",
        &[TypeDescriptor::I32, TypeDescriptor::I32],
        TypeDescriptor::I32,
    ),
    MethodDescriptor::new("is_ready", &[], TypeDescriptor::Bool),
    MethodDescriptor::new(
        "describe",
        &[TypeDescriptor::I64],
        TypeDescriptor::object("demo.Description"),
    ),
];

struct CalculatorStub(ServiceHandle);

impl ServiceStub for CalculatorStub {
    const SERVICE_NAME: &'static str = "demo.Calculator";

    fn methods() -> &'static [MethodDescriptor] {
        &CALCULATOR_METHODS
    }

    fn from_handle(handle: ServiceHandle) -> Self {
        Self(handle)
    }
}

impl Calculator for CalculatorStub {
    fn add(&self, a: i32, b: i32) -> Result<i32> {
        self.0.call("add", vec![a.into_value(), b.into_value()])
    }

    fn is_ready(&self) -> Result<bool> {
        self.0.call("is_ready", Vec::new())
    }

    fn describe(&self, id: i64) -> Result<Value> {
        self.0.call("describe", vec![id.into_value()])
    }
}

fn factory(dir: &TempDir, mock: bool) -> ProxyFactory {
    reset();
    let context = ApplicationContext::new(
        fake_plugins(dir),
        Arc::new(FixedConfigSource::new(fake_config(mock))),
    );
    ProxyFactory::new(Arc::new(context))
}

fn provider(host: &str, port: u16) -> ServiceMetaInfo {
    ServiceMetaInfo::new("demo.Calculator", "1.0", host, port)
}

#[test]
fn test_mock_mode_synthesizes_defaults_without_network() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, true).get_proxy::<CalculatorStub>().unwrap();
    let discoveries = discovery_calls();

    assert_eq!(calculator.add(1, 2).unwrap(), 0);
    assert!(!calculator.is_ready().unwrap());
    assert_eq!(calculator.describe(7).unwrap(), Value::Null);

    assert_eq!(discovery_calls(), discoveries);
    assert!(sent().is_empty());
}

#[test]
fn test_explicit_mock_proxy_ignores_live_configuration() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_mock_proxy::<CalculatorStub>();
    set_discovered(vec![provider("10.0.0.1", 9000)]);

    assert_eq!(calculator.add(20, 22).unwrap(), 0);
    assert!(sent().is_empty());
}

#[test]
fn test_live_call_round_trips_through_selected_provider() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_proxy::<CalculatorStub>().unwrap();
    set_discovered(vec![provider("10.0.0.1", 9000), provider("10.0.0.2", 9000)]);
    set_reply(RpcResponse::success(Value::Int(42), TypeDescriptor::I32));

    assert_eq!(calculator.add(20, 22).unwrap(), 42);

    let sent = sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "http://10.0.0.1:9000");
    let request: RpcRequest = serde_json::from_slice(&sent[0].1).unwrap();
    assert_eq!(request.service_name(), "demo.Calculator");
    assert_eq!(request.method_name(), "add");
    assert_eq!(request.parameter_types(), &[TypeDescriptor::I32, TypeDescriptor::I32]);
    assert_eq!(request.args(), &[Value::Int(20), Value::Int(22)]);
}

#[test]
fn test_no_provider_is_service_unavailable_without_sending() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_proxy::<CalculatorStub>().unwrap();
    set_reply(RpcResponse::success(Value::Int(42), TypeDescriptor::I32));

    let err = calculator.add(1, 2).unwrap_err();

    assert!(matches!(
        err,
        Error::ServiceUnavailable { ref service_key } if service_key == "demo.Calculator:1.0"
    ));
    assert!(sent().is_empty());
}

#[test]
fn test_remote_failure_surfaces_as_remote_execution() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_proxy::<CalculatorStub>().unwrap();
    set_discovered(vec![provider("10.0.0.1", 9000)]);
    set_reply(RpcResponse::failure("division by zero"));

    let err = calculator.add(1, 0).unwrap_err();
    assert!(matches!(err, Error::RemoteExecution { ref message } if message == "division by zero"));
}

#[test]
fn test_transport_failure_is_not_swallowed() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_proxy::<CalculatorStub>().unwrap();
    set_discovered(vec![provider("10.0.0.1", 9000)]);

    let err = calculator.add(1, 2).unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(sent().len(), 1);
}

#[test]
fn test_null_data_fails_conversion_to_integer() {
    let dir = fake_descriptors();
    let calculator = factory(&dir, false).get_proxy::<CalculatorStub>().unwrap();
    set_discovered(vec![provider("10.0.0.1", 9000)]);
    let mut reply = RpcResponse::success(Value::Null, TypeDescriptor::I32);
    reply.data = None;
    set_reply(reply);

    assert!(matches!(calculator.add(1, 2), Err(Error::InvalidArgument { .. })));
}

struct LastProviderSelector;

impl ProviderSelector for LastProviderSelector {
    fn select<'a>(
        &self,
        _service_key: &str,
        candidates: &'a [ServiceMetaInfo],
    ) -> Option<&'a ServiceMetaInfo> {
        candidates.last()
    }
}

#[test]
fn test_custom_selector_chooses_provider() {
    let dir = fake_descriptors();
    let base = factory(&dir, false);
    let calculator =
        ProxyFactory::with_selector(Arc::clone(base.context()), Arc::new(LastProviderSelector))
            .get_proxy::<CalculatorStub>()
            .unwrap();
    set_discovered(vec![provider("10.0.0.1", 9000), provider("10.0.0.2", 9001)]);
    set_reply(RpcResponse::success(Value::Bool(true), TypeDescriptor::Bool));

    assert!(calculator.is_ready().unwrap());
    assert_eq!(sent()[0].0, "http://10.0.0.2:9001");
}

#[test]
fn test_argument_count_mismatch_fails_before_discovery() {
    let dir = fake_descriptors();
    let handle = factory(&dir, false)
        .get_handle(CalculatorStub::SERVICE_NAME, CalculatorStub::methods())
        .unwrap();
    let discoveries = discovery_calls();

    let err = handle.call::<i32>("add", vec![Value::Int(1)]).unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(discovery_calls(), discoveries);
}

#[test]
fn test_dynamic_handle_rejects_undeclared_method() {
    let dir = fake_descriptors();
    let handle = factory(&dir, true)
        .get_handle(
            "demo.Dynamic",
            vec![MethodDescriptor::dynamic("ping", Vec::new(), TypeDescriptor::Unit)],
        )
        .unwrap();

    assert_eq!(handle.call::<Value>("ping", Vec::new()).unwrap(), Value::Null);
    assert!(matches!(
        handle.call::<Value>("pong", Vec::new()),
        Err(Error::InvalidArgument { .. })
    ));
}
