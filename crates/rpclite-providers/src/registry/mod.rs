//! Service Registry Backends
//!
//! | Backend | Key | Description |
//! |---------|-----|-------------|
//! | [`MemoryServiceRegistry`] | `memory` | Process-local registrations, default |
//! | [`StaticServiceRegistry`] | `static` | Fixed provider list from configuration |

pub mod memory;
pub mod static_registry;

pub use memory::MemoryServiceRegistry;
pub use static_registry::StaticServiceRegistry;
