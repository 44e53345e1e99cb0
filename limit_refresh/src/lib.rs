//! limit_refresh - Rate-limit refresh coordination library
//!
//! Given an external identity-provider account identifier, this crate
//! resolves the linked internal user and asks the downstream usage-limit
//! gateway to recompute that user's rate limits.

mod config;
mod coordination;
mod identity;
mod refresh;

pub use config::{LIMIT_GATEWAY_URL, SAMS_HOST_NAME};

pub use coordination::{CoordinationError, refresh_rate_limits_core};

pub use identity::{
    AccountFilter, IdentityError, IdentityProvider, LinkedAccount, LinkedAccountStore,
    PostgresLinkedAccountStore, SERVICE_TYPE_OPENIDCONNECT, SqliteLinkedAccountStore,
};

pub use refresh::{GatewayRefresher, RateLimitRefresher, RefreshError};
