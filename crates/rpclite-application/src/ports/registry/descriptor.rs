//! System-tier descriptor resources
//!
//! Framework-shipped descriptor texts are compiled into the binary and
//! contributed here. They form the system tier that custom descriptor
//! directories override.

/// One embedded descriptor resource
#[derive(Debug)]
pub struct DescriptorResource {
    /// Capability type name the resource describes
    pub capability: &'static str,
    /// Where the text came from, for log messages
    pub origin: &'static str,
    /// Newline-delimited `key=implementationIdentifier` entries
    pub content: &'static str,
}

#[linkme::distributed_slice]
pub static SYSTEM_DESCRIPTORS: [DescriptorResource] = [..];
