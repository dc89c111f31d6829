//! Envelope Codec Implementations
//!
//! | Codec | Key | Description |
//! |-------|-----|-------------|
//! | [`JsonCodec`] | `json` | Human-readable, default |
//! | [`BincodeCodec`] | `bincode` | Compact binary |

pub mod bincode;
pub mod json;

pub use self::bincode::BincodeCodec;
pub use self::json::JsonCodec;
