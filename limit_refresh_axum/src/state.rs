use std::sync::Arc;

use limit_refresh::{IdentityProvider, LinkedAccountStore, RateLimitRefresher};

/// Shared state for the refresh endpoint handlers
///
/// Collaborators and the provider descriptor are injected here at wiring
/// time; the handlers never read process-global configuration.
#[derive(Clone)]
pub struct AppState {
    /// Linked-account store
    pub store: Arc<dyn LinkedAccountStore>,

    /// Rate-limit refresh delegate
    pub refresher: Arc<dyn RateLimitRefresher>,

    /// Identity provider linked accounts are matched against
    pub provider: IdentityProvider,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LinkedAccountStore>,
        refresher: Arc<dyn RateLimitRefresher>,
        provider: IdentityProvider,
    ) -> Self {
        Self {
            store,
            refresher,
            provider,
        }
    }
}
