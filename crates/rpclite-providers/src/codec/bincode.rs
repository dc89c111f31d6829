//! Bincode codec
//!
//! Compact binary encoding. `Value` and `TypeDescriptor` are externally
//! tagged enums, which bincode round-trips without a self-describing format.

use std::sync::Arc;

use rpclite_application::ports::registry::{CODEC_PROVIDERS, CodecProviderEntry};
use rpclite_domain::error::{Error, Result};
use rpclite_domain::ports::providers::Codec;
use rpclite_domain::value_objects::{RpcRequest, RpcResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Implementation identifier of [`BincodeCodec`]
pub const BINCODE_CODEC_ID: &str = "rpclite.codec.BincodeCodec";

/// Binary envelope codec backed by `bincode`
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl BincodeCodec {
    /// Create a new bincode codec
    pub fn new() -> Self {
        Self
    }

    fn encode<T: Serialize>(value: &T, what: &str) -> Result<Vec<u8>> {
        bincode::serialize(value)
            .map_err(|e| Error::codec_with_source(format!("Failed to serialize {what} with bincode"), e))
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T> {
        bincode::deserialize(bytes).map_err(|e| {
            Error::codec_with_source(format!("Failed to deserialize {what} with bincode"), e)
        })
    }
}

impl Codec for BincodeCodec {
    fn serialize_request(&self, request: &RpcRequest) -> Result<Vec<u8>> {
        Self::encode(request, "request")
    }

    fn deserialize_request(&self, bytes: &[u8]) -> Result<RpcRequest> {
        Self::decode(bytes, "request")
    }

    fn serialize_response(&self, response: &RpcResponse) -> Result<Vec<u8>> {
        Self::encode(response, "response")
    }

    fn deserialize_response(&self, bytes: &[u8]) -> Result<RpcResponse> {
        Self::decode(bytes, "response")
    }

    fn codec_name(&self) -> &str {
        "bincode"
    }
}

#[linkme::distributed_slice(CODEC_PROVIDERS)]
static BINCODE_CODEC: CodecProviderEntry = CodecProviderEntry {
    name: BINCODE_CODEC_ID,
    description: "Compact binary envelope codec (bincode)",
    factory: || Ok(Arc::new(BincodeCodec::new())),
};
