//! Capability plugin resolution
//!
//! Maps a `(capability, key)` pair to a cached singleton implementation.
//! Keys come from layered descriptor resources; implementations come from
//! the compile-time registries in [`crate::ports::registry`].

pub mod capability;
pub mod descriptor;
pub mod registry;

pub use capability::{Capability, CodecCapability, ServiceRegistryCapability, TransportCapability};
pub use descriptor::{DescriptorRoot, DescriptorTier, parse_descriptor};
pub use registry::PluginRegistry;
