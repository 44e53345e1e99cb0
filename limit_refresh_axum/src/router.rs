use axum::{Router, routing::post};

use crate::handlers::refresh_rate_limits_handler;
use crate::state::AppState;

/// Create a router for the rate-limit refresh endpoint
pub fn refresh_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/refresh-rate-limits/{sams_account_id}",
            post(refresh_rate_limits_handler),
        )
        .with_state(state)
}
