//! Shared state for request handlers.

use std::sync::Arc;

use srcpack_core::BundleConfig;

/// Shared application state.
///
/// The bundle configuration is immutable once the server starts; each
/// request builds its archive independently from it, so no locking is
/// needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bundle configuration used for every download request.
    pub bundle_config: Arc<BundleConfig>,
}

impl AppState {
    /// Creates state from a bundle configuration.
    #[must_use]
    pub fn new(bundle_config: BundleConfig) -> Self {
        Self {
            bundle_config: Arc::new(bundle_config),
        }
    }
}
