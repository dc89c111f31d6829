//! Envelope codec tests

use std::collections::BTreeMap;

use rpclite_domain::value_objects::{RpcRequest, RpcResponse, TypeDescriptor, Value};
use rpclite_providers::codec::{BincodeCodec, JsonCodec};
use rpclite_providers::{Codec, Error};

fn codecs() -> Vec<Box<dyn Codec>> {
    vec![Box::new(JsonCodec::new()), Box::new(BincodeCodec::new())]
}

fn sample_request() -> RpcRequest {
    let mut user = BTreeMap::new();
    user.insert("name".to_string(), Value::String("ada".to_string()));
    user.insert("age".to_string(), Value::Int(36));

    RpcRequest::new(
        "demo.UserService",
        "save",
        vec![
            TypeDescriptor::object("demo.User"),
            TypeDescriptor::Bool,
            TypeDescriptor::Bytes,
        ],
        vec![Value::Map(user), Value::Bool(true), Value::Bytes(vec![0, 1, 255])],
    )
    .expect("valid request")
}

#[test]
fn test_request_survives_every_codec() {
    let request = sample_request();
    for codec in codecs() {
        let bytes = codec.serialize_request(&request).unwrap();
        let decoded = codec.deserialize_request(&bytes).unwrap();
        assert_eq!(decoded, request, "codec {}", codec.codec_name());
    }
}

#[test]
fn test_failure_response_survives_every_codec() {
    let response = RpcResponse::failure("user not found");
    for codec in codecs() {
        let bytes = codec.serialize_response(&response).unwrap();
        let decoded = codec.deserialize_response(&bytes).unwrap();
        assert_eq!(decoded, response, "codec {}", codec.codec_name());
        assert!(matches!(
            decoded.into_result(),
            Err(Error::RemoteExecution { .. })
        ));
    }
}

#[test]
fn test_json_response_wire_format_is_readable() {
    let codec = JsonCodec::new();
    let bytes = codec
        .serialize_response(&RpcResponse::success(Value::Int(42), TypeDescriptor::I32))
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("42"), "unexpected payload: {text}");
}

#[test]
fn test_garbage_input_is_a_codec_error() {
    for codec in codecs() {
        let err = codec.deserialize_response(&[0xff, 0x00, 0x13]).unwrap_err();
        assert!(
            matches!(err, Error::Codec { .. }),
            "codec {} returned {err:?}",
            codec.codec_name()
        );
    }
}

#[test]
fn test_json_rejects_request_with_mismatched_arity() {
    let payload = br#"{"service_name":"s","method_name":"m","parameter_types":["Bool"],"args":[]}"#;
    let err = JsonCodec::new().deserialize_request(payload).unwrap_err();
    assert!(matches!(err, Error::Codec { .. }));
}

#[test]
fn test_json_rejects_non_finite_floats() {
    let codec = JsonCodec::new();
    let request = RpcRequest::new(
        "demo.Stats",
        "record",
        vec![TypeDescriptor::F64],
        vec![Value::Float(f64::NAN)],
    )
    .unwrap();
    assert!(matches!(
        codec.serialize_request(&request),
        Err(Error::Codec { .. })
    ));

    let nested = Value::List(vec![Value::Float(1.5), Value::Float(f64::INFINITY)]);
    let response = RpcResponse::success(nested, TypeDescriptor::List);
    assert!(matches!(
        codec.serialize_response(&response),
        Err(Error::Codec { .. })
    ));
}

#[test]
fn test_bincode_keeps_non_finite_floats() {
    let codec = BincodeCodec::new();
    let response = RpcResponse::success(Value::Float(f64::NEG_INFINITY), TypeDescriptor::F64);
    let bytes = codec.serialize_response(&response).unwrap();
    assert_eq!(codec.deserialize_response(&bytes).unwrap(), response);
}
