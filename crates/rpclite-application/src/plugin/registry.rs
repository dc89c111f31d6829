//! Plugin registry
//!
//! Resolves `(capability, key)` to a singleton implementation instance.
//!
//! ```text
//! load::<C>()            roots (system → custom) ──► key → identifier map
//! get_instance::<C>(key) key ──► identifier ──► cached Arc<C::Instance>
//! ```
//!
//! Both maps are `DashMap`s, so callers on any thread may load and resolve
//! concurrently without external locking.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use rpclite_domain::error::{Error, Result};
use tracing::{debug, info, warn};

use super::capability::{Capability, CodecCapability, ServiceRegistryCapability, TransportCapability};
use super::descriptor::{DescriptorRoot, parse_descriptor};
use crate::ports::registry::{SYSTEM_DESCRIPTORS, find_provider};

type SharedInstance = Arc<dyn Any + Send + Sync>;

/// Capability plugin loader and singleton cache
pub struct PluginRegistry {
    roots: Vec<DescriptorRoot>,
    /// capability type name -> (key -> implementation identifier)
    loaded: DashMap<&'static str, HashMap<String, String>>,
    /// implementation identifier -> `Arc<C::Instance>` boxed as `Any`
    instances: DashMap<String, SharedInstance>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("roots", &self.roots)
            .field("loaded", &self.loaded.len())
            .field("instances", &self.instances.len())
            .finish()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new(vec![DescriptorRoot::Embedded])
    }
}

impl PluginRegistry {
    /// Create a registry scanning `roots`
    ///
    /// Roots are ordered by tier (stable within a tier), so custom roots are
    /// always scanned after system roots.
    pub fn new(mut roots: Vec<DescriptorRoot>) -> Self {
        roots.sort_by_key(DescriptorRoot::tier);
        Self {
            roots,
            loaded: DashMap::new(),
            instances: DashMap::new(),
        }
    }

    /// Embedded system descriptors followed by the given custom directories
    pub fn with_custom_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<std::path::Path>,
    {
        let mut roots = vec![DescriptorRoot::Embedded];
        roots.extend(dirs.into_iter().map(DescriptorRoot::custom));
        Self::new(roots)
    }

    /// Descriptor roots in scan order
    pub fn roots(&self) -> &[DescriptorRoot] {
        &self.roots
    }

    /// Load every capability the framework knows about
    pub fn load_all(&self) {
        info!("Loading all capability descriptors");
        self.load::<CodecCapability>();
        self.load::<ServiceRegistryCapability>();
        self.load::<TransportCapability>();
    }

    /// Scan all roots for the descriptors of capability `C`
    ///
    /// Later roots override earlier ones on key collision. The result replaces
    /// any earlier load of `C`. Unreadable resources are logged and skipped;
    /// entries naming an identifier with no registered factory are logged and
    /// skipped.
    pub fn load<C: Capability>(&self) -> HashMap<String, String> {
        info!(capability = C::TYPE_NAME, "Loading capability descriptors");
        let mut mapping = HashMap::new();

        for root in &self.roots {
            for (origin, content) in Self::read_resources(root, C::TYPE_NAME) {
                for (key, implementation) in parse_descriptor(&content) {
                    if find_provider(C::providers(), &implementation).is_none() {
                        warn!(
                            capability = C::TYPE_NAME,
                            key = %key,
                            implementation = %implementation,
                            origin = %origin,
                            "Descriptor names an unregistered implementation"
                        );
                        continue;
                    }
                    if let Some(previous) = mapping.insert(key.clone(), implementation.clone()) {
                        debug!(
                            capability = C::TYPE_NAME,
                            key = %key,
                            previous = %previous,
                            implementation = %implementation,
                            tier = %root.tier(),
                            "Descriptor entry overridden"
                        );
                    }
                }
            }
        }

        self.loaded.insert(C::TYPE_NAME, mapping.clone());
        mapping
    }

    /// Descriptor resources for one capability under one root, as (origin, text)
    fn read_resources(root: &DescriptorRoot, type_name: &str) -> Vec<(String, String)> {
        match root {
            DescriptorRoot::Embedded => SYSTEM_DESCRIPTORS
                .iter()
                .filter(|resource| resource.capability == type_name)
                .map(|resource| (resource.origin.to_string(), resource.content.to_string()))
                .collect(),
            DescriptorRoot::Directory { path, .. } => {
                if !path.is_dir() {
                    warn!(path = %path.display(), "Descriptor directory not found");
                    return Vec::new();
                }
                let file = path.join(type_name);
                if !file.is_file() {
                    debug!(path = %file.display(), "No descriptor resource");
                    return Vec::new();
                }
                match std::fs::read_to_string(&file) {
                    Ok(content) => vec![(file.display().to_string(), content)],
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "Descriptor resource load error");
                        Vec::new()
                    }
                }
            }
        }
    }

    /// Check whether `C` has been loaded
    pub fn is_loaded<C: Capability>(&self) -> bool {
        self.loaded.contains_key(C::TYPE_NAME)
    }

    /// The loaded `key -> identifier` mapping of `C`, if loaded
    pub fn list_loaded<C: Capability>(&self) -> Option<HashMap<String, String>> {
        self.loaded.get(C::TYPE_NAME).map(|mapping| mapping.value().clone())
    }

    /// Resolve `key` to the singleton implementation of `C`
    ///
    /// The instance is constructed on first request and cached by
    /// implementation identifier, so keys of any capability resolving to the
    /// same identifier share one instance.
    pub fn get_instance<C: Capability>(&self, key: &str) -> Result<Arc<C::Instance>> {
        let implementation = {
            let mapping = self
                .loaded
                .get(C::TYPE_NAME)
                .ok_or_else(|| Error::capability_not_loaded(C::TYPE_NAME))?;
            mapping
                .get(key)
                .cloned()
                .ok_or_else(|| Error::unknown_key(C::TYPE_NAME, key))?
        };

        let cached = Arc::clone(
            self.instances
                .entry(implementation.clone())
                .or_try_insert_with(|| Self::instantiate::<C>(&implementation))?
                .value(),
        );

        cached
            .downcast_ref::<Arc<C::Instance>>()
            .cloned()
            .ok_or_else(|| {
                Error::instantiation(
                    &implementation,
                    format!("cached instance is not a {}", C::TYPE_NAME),
                )
            })
    }

    fn instantiate<C: Capability>(implementation: &str) -> Result<SharedInstance> {
        let entry = find_provider(C::providers(), implementation)
            .ok_or_else(|| Error::instantiation(implementation, "no factory registered"))?;
        let instance =
            (entry.factory)().map_err(|message| Error::instantiation(implementation, message))?;
        info!(
            capability = C::TYPE_NAME,
            implementation, "Instantiated capability implementation"
        );
        Ok(Arc::new(instance))
    }

    /// Number of constructed singletons
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}
