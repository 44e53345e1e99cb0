use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use limit_refresh::refresh_rate_limits_core;

use crate::error::IntoResponseError;
use crate::state::AppState;

/// Trigger a rate-limit refresh for the user linked to `sams_account_id`
///
/// Responds 200 with an empty body on success; error statuses follow the
/// mapping in `error.rs`.
pub(crate) async fn refresh_rate_limits_handler(
    State(state): State<AppState>,
    Path(sams_account_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    tracing::debug!("Rate limit refresh requested for account {}", sams_account_id);

    refresh_rate_limits_core(
        state.store.as_ref(),
        state.refresher.as_ref(),
        &state.provider,
        &sams_account_id,
    )
    .await
    .into_response_error()
    .map(|()| StatusCode::OK)
}
