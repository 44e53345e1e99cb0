//! Coordination of the lookup-then-refresh flow

mod errors;

pub use errors::CoordinationError;

use crate::identity::{AccountFilter, IdentityProvider, LinkedAccountStore};
use crate::refresh::RateLimitRefresher;

/// Resolve an external account identifier to an internal user and refresh
/// that user's rate limits.
///
/// The flow is strictly linear: validate the identifier, list linked
/// accounts for the provider (at most one row requested), refresh the
/// matched user. Every failure is terminal; there are no retries.
///
/// The account store enforces uniqueness of (service_type, service_id,
/// account_id), so at most one row is expected back. Should more than one
/// ever be returned, the first row wins; this is documented policy, not an
/// error.
pub async fn refresh_rate_limits_core(
    store: &dyn LinkedAccountStore,
    refresher: &dyn RateLimitRefresher,
    provider: &IdentityProvider,
    sams_account_id: &str,
) -> Result<(), CoordinationError> {
    if sams_account_id.is_empty() {
        return Err(CoordinationError::InvalidRequest.log());
    }

    let filter = AccountFilter::for_provider(provider, sams_account_id).with_limit(1);
    let accounts = store.list_accounts(&filter).await?;

    let Some(account) = accounts.first() else {
        return Err(CoordinationError::ResourceNotFound {
            resource_type: "LinkedAccount".to_string(),
            resource_id: sams_account_id.to_string(),
        }
        .log());
    };

    tracing::debug!("Refreshing rate limits for user {}", account.user_id);
    refresher.refresh_rate_limits(&account.user_id).await?;

    Ok(())
}
