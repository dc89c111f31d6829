//! Transport Implementation Registry

use rpclite_domain::ports::providers::Transport;

use super::{ProviderEntry, describe_providers};

/// Registry entry for transports
pub type TransportProviderEntry = ProviderEntry<dyn Transport>;

#[linkme::distributed_slice]
pub static TRANSPORT_PROVIDERS: [TransportProviderEntry] = [..];

/// List all registered transports as (identifier, description)
pub fn list_transport_providers() -> Vec<(&'static str, &'static str)> {
    describe_providers(&TRANSPORT_PROVIDERS)
}
