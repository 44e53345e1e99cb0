mod errors;
mod storage;
mod store;
mod types;

pub use errors::IdentityError;
pub use storage::{PostgresLinkedAccountStore, SqliteLinkedAccountStore};
pub use store::LinkedAccountStore;
pub use types::{AccountFilter, IdentityProvider, LinkedAccount, SERVICE_TYPE_OPENIDCONNECT};
