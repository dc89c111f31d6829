//! Transport Port

use crate::error::Result;

/// Point-to-point byte exchange with a provider
///
/// Sends one serialized request to `address` and blocks until the raw
/// response bytes arrive. Failures must be returned as
/// [`Error::Transport`](crate::error::Error::Transport) so callers can tell
/// "never reached the provider" apart from a remote failure.
pub trait Transport: Send + Sync {
    /// Send `payload` to `address` and return the response body
    fn send(&self, address: &str, payload: &[u8]) -> Result<Vec<u8>>;

    /// Get the name of this transport
    fn transport_name(&self) -> &str;
}
