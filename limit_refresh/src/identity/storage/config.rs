use std::sync::LazyLock;

/// Table name for linked accounts
pub(super) static DB_TABLE_LINKED_ACCOUNTS: LazyLock<String> = LazyLock::new(|| {
    std::env::var("DB_TABLE_LINKED_ACCOUNTS").unwrap_or_else(|_| "linked_accounts".to_string())
});
