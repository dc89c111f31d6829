//! Transports
//!
//! | Transport | Key | Description |
//! |-----------|-----|-------------|
//! | [`HttpTransport`] | `http` | Blocking HTTP POST of the serialized request |

pub mod http;

pub use http::HttpTransport;
