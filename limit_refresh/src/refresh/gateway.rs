use async_trait::async_trait;

use super::RateLimitRefresher;
use super::errors::RefreshError;

/// Rate-limit refresher backed by the usage-limit gateway's HTTP API
#[derive(Clone)]
pub struct GatewayRefresher {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayRefresher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn refresh_url(&self, user_id: &str) -> String {
        format!("{}/v1/limits/{}/refresh", self.base_url, user_id)
    }
}

#[async_trait]
impl RateLimitRefresher for GatewayRefresher {
    async fn refresh_rate_limits(&self, user_id: &str) -> Result<(), RefreshError> {
        let url = self.refresh_url(user_id);
        tracing::debug!("Requesting rate limit refresh: {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| RefreshError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RefreshError::Gateway(format!(
                "rate limit refresh returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_url() {
        let refresher = GatewayRefresher::new("http://localhost:9992");
        assert_eq!(
            refresher.refresh_url("42"),
            "http://localhost:9992/v1/limits/42/refresh"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let refresher = GatewayRefresher::new("http://localhost:9992/");
        assert_eq!(
            refresher.refresh_url("42"),
            "http://localhost:9992/v1/limits/42/refresh"
        );
    }
}
