use async_trait::async_trait;

use super::errors::IdentityError;
use super::types::{AccountFilter, LinkedAccount};

/// Read-side interface to the linked-account store
///
/// The account store owns the records; this crate only lists them. The
/// write surface (upsert, delete) lives on the concrete backends and is
/// used by provisioning and tests, not by the refresh path.
#[async_trait]
pub trait LinkedAccountStore: Send + Sync {
    /// List linked accounts matching the filter, oldest first
    async fn list_accounts(
        &self,
        filter: &AccountFilter,
    ) -> Result<Vec<LinkedAccount>, IdentityError>;
}
