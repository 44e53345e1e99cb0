use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Service type recorded on linked accounts provisioned through OpenID Connect
pub const SERVICE_TYPE_OPENIDCONNECT: &str = "openidconnect";

/// Represents an external identity-provider account linked to a user
///
/// Rows are owned and mutated by the account store; this crate only reads
/// them to map an external `account_id` back to the internal `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LinkedAccount {
    pub id: String,
    pub user_id: String,
    pub service_type: String,
    pub service_id: String,
    pub account_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for LinkedAccount {
    fn default() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            service_type: String::new(),
            service_id: String::new(),
            account_id: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

/// Fixed descriptor of the external identity provider linked accounts are
/// matched against
///
/// Constant for the lifetime of the process and never derived from caller
/// input; constructed once at wiring time and injected into the handler
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProvider {
    pub service_type: String,
    pub service_id: String,
}

impl IdentityProvider {
    /// Descriptor for the OpenID Connect provider served at `host`
    pub fn openidconnect(host: &str) -> Self {
        Self {
            service_type: SERVICE_TYPE_OPENIDCONNECT.to_string(),
            service_id: format!("https://{host}"),
        }
    }
}

/// Filter for linked-account queries
///
/// Unset fields do not constrain the query. Mirrors the list options the
/// account store exposes: account id, service type, service id, row limit.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub account_id: Option<String>,
    pub service_type: Option<String>,
    pub service_id: Option<String>,
    pub limit: Option<i64>,
}

impl AccountFilter {
    /// Filter matching `account_id` within the given provider
    pub fn for_provider(provider: &IdentityProvider, account_id: &str) -> Self {
        Self {
            account_id: Some(account_id.to_string()),
            service_type: Some(provider.service_type.clone()),
            service_id: Some(provider.service_id.clone()),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openidconnect_provider_descriptor() {
        let provider = IdentityProvider::openidconnect("accounts.sams.example.com");
        assert_eq!(provider.service_type, "openidconnect");
        assert_eq!(provider.service_id, "https://accounts.sams.example.com");
    }

    #[test]
    fn test_filter_for_provider() {
        let provider = IdentityProvider::openidconnect("accounts.sams.example.com");
        let filter = AccountFilter::for_provider(&provider, "abc-123").with_limit(1);

        assert_eq!(filter.account_id.as_deref(), Some("abc-123"));
        assert_eq!(filter.service_type.as_deref(), Some("openidconnect"));
        assert_eq!(
            filter.service_id.as_deref(),
            Some("https://accounts.sams.example.com")
        );
        assert_eq!(filter.limit, Some(1));
    }
}
