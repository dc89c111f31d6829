//! JSON codec
//!
//! JSON has no representation for NaN or infinities, so envelopes carrying
//! a non-finite float are rejected at serialization time.

use std::sync::Arc;

use rpclite_application::ports::registry::{CODEC_PROVIDERS, CodecProviderEntry};
use rpclite_domain::error::{Error, Result};
use rpclite_domain::ports::providers::Codec;
use rpclite_domain::value_objects::{RpcRequest, RpcResponse, Value};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Implementation identifier of [`JsonCodec`]
pub const JSON_CODEC_ID: &str = "rpclite.codec.JsonCodec";

/// JSON envelope codec backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }

    fn encode<T: Serialize>(value: &T, what: &str) -> Result<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| Error::codec_with_source(format!("Failed to serialize {what} as JSON"), e))
    }

    fn ensure_finite<'a, I>(values: I, what: &str) -> Result<()>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        if values.into_iter().all(is_finite) {
            Ok(())
        } else {
            Err(Error::codec(format!(
                "{what} carries a non-finite float, which JSON cannot represent"
            )))
        }
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| {
            Error::codec_with_source(format!("Failed to deserialize {what} from JSON"), e)
        })
    }
}

impl Codec for JsonCodec {
    fn serialize_request(&self, request: &RpcRequest) -> Result<Vec<u8>> {
        Self::ensure_finite(request.args(), "request")?;
        Self::encode(request, "request")
    }

    fn deserialize_request(&self, bytes: &[u8]) -> Result<RpcRequest> {
        Self::decode(bytes, "request")
    }

    fn serialize_response(&self, response: &RpcResponse) -> Result<Vec<u8>> {
        Self::ensure_finite(&response.data, "response")?;
        Self::encode(response, "response")
    }

    fn deserialize_response(&self, bytes: &[u8]) -> Result<RpcResponse> {
        Self::decode(bytes, "response")
    }

    fn codec_name(&self) -> &str {
        "json"
    }
}

fn is_finite(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_finite(),
        Value::List(items) => items.iter().all(is_finite),
        Value::Map(entries) => entries.values().all(is_finite),
        _ => true,
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CODEC_PROVIDERS)]
static JSON_CODEC: CodecProviderEntry = CodecProviderEntry {
    name: JSON_CODEC_ID,
    description: "JSON envelope codec (serde_json)",
    factory: || Ok(Arc::new(JsonCodec::new())),
};
