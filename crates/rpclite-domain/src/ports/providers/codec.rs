//! Codec Port
//!
//! Serializes request and response envelopes. The target type of
//! deserialization is selected by the method called.

use crate::error::Result;
use crate::value_objects::{RpcRequest, RpcResponse};

/// Envelope serialization capability
///
/// Implementations must round-trip both envelopes losslessly.
pub trait Codec: Send + Sync {
    /// Serialize a request envelope
    fn serialize_request(&self, request: &RpcRequest) -> Result<Vec<u8>>;

    /// Deserialize a request envelope
    fn deserialize_request(&self, bytes: &[u8]) -> Result<RpcRequest>;

    /// Serialize a response envelope
    fn serialize_response(&self, response: &RpcResponse) -> Result<Vec<u8>>;

    /// Deserialize a response envelope
    fn deserialize_response(&self, bytes: &[u8]) -> Result<RpcResponse>;

    /// Get the name of this codec
    fn codec_name(&self) -> &str;
}
