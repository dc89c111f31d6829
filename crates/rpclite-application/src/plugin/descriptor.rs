//! Descriptor resources and their roots
//!
//! A descriptor resource is UTF-8 text with one `key=implementationIdentifier`
//! entry per line, filed under the capability's `TYPE_NAME`.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Source tier of a descriptor root
///
/// Ordering matters: roots are scanned in ascending tier order, so custom
/// entries override system entries with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DescriptorTier {
    /// Framework-shipped descriptors
    System,
    /// Deployment-supplied descriptors
    Custom,
}

impl std::fmt::Display for DescriptorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// One place descriptor resources are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorRoot {
    /// Descriptors compiled into the binary (`SYSTEM_DESCRIPTORS`)
    Embedded,
    /// A directory holding one file per capability type name
    Directory {
        /// Tier the directory belongs to
        tier: DescriptorTier,
        /// Directory path
        path: PathBuf,
    },
}

impl DescriptorRoot {
    /// Custom-tier directory root
    pub fn custom<P: AsRef<Path>>(path: P) -> Self {
        Self::Directory {
            tier: DescriptorTier::Custom,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// System-tier directory root
    pub fn system<P: AsRef<Path>>(path: P) -> Self {
        Self::Directory {
            tier: DescriptorTier::System,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Tier of this root
    pub fn tier(&self) -> DescriptorTier {
        match self {
            Self::Embedded => DescriptorTier::System,
            Self::Directory { tier, .. } => *tier,
        }
    }
}

/// Parse descriptor text into `(key, implementationIdentifier)` pairs
///
/// Blank lines and `#` comments are ignored, as are lines without `=`.
pub fn parse_descriptor(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match line.split_once('=') {
            Some((key, implementation)) => {
                let (key, implementation) = (key.trim(), implementation.trim());
                if key.is_empty() || implementation.is_empty() {
                    debug!(line, "Skipping descriptor line with empty key or identifier");
                    None
                } else {
                    Some((key.to_string(), implementation.to_string()))
                }
            }
            None => {
                debug!(line, "Skipping malformed descriptor line");
                None
            }
        })
        .collect()
}
