//! Application ports
//!
//! - **registry/** - Compile-time implementation tables for every capability
//! - **infrastructure/** - Services the application layer expects to be injected

/// Infrastructure service ports
pub mod infrastructure;
/// Implementation registries
pub mod registry;
