//! Codec Implementation Registry

use rpclite_domain::ports::providers::Codec;

use super::{ProviderEntry, describe_providers};

/// Registry entry for codecs
pub type CodecProviderEntry = ProviderEntry<dyn Codec>;

// Auto-collection via linkme distributed slices - codecs submit entries at compile time
#[linkme::distributed_slice]
pub static CODEC_PROVIDERS: [CodecProviderEntry] = [..];

/// List all registered codecs as (identifier, description)
pub fn list_codec_providers() -> Vec<(&'static str, &'static str)> {
    describe_providers(&CODEC_PROVIDERS)
}
