//! Provider selection policy

use rpclite_domain::value_objects::ServiceMetaInfo;

/// Chooses one provider among the discovered candidates
pub trait ProviderSelector: Send + Sync {
    /// Pick a candidate; `None` only when `candidates` is empty
    fn select<'a>(
        &self,
        service_key: &str,
        candidates: &'a [ServiceMetaInfo],
    ) -> Option<&'a ServiceMetaInfo>;
}

/// Always picks the first discovered provider
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstProviderSelector;

impl ProviderSelector for FirstProviderSelector {
    fn select<'a>(
        &self,
        _service_key: &str,
        candidates: &'a [ServiceMetaInfo],
    ) -> Option<&'a ServiceMetaInfo> {
        candidates.first()
    }
}
