mod errors;
mod gateway;

pub use errors::RefreshError;
pub use gateway::GatewayRefresher;

use async_trait::async_trait;

/// Downstream delegate that recomputes a user's usage rate limits
#[async_trait]
pub trait RateLimitRefresher: Send + Sync {
    /// Ask the usage-limit subsystem to refresh the rate-limit state of
    /// `user_id`
    async fn refresh_rate_limits(&self, user_id: &str) -> Result<(), RefreshError>;
}
