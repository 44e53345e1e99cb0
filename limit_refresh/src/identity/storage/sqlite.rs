use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::identity::errors::IdentityError;
use crate::identity::store::LinkedAccountStore;
use crate::identity::types::{AccountFilter, LinkedAccount};

use super::config::DB_TABLE_LINKED_ACCOUNTS;

/// Linked-account store backed by a SQLite pool
#[derive(Clone)]
pub struct SqliteLinkedAccountStore {
    pool: Pool<Sqlite>,
}

impl SqliteLinkedAccountStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Initialize the linked-accounts table
    pub async fn init(&self) -> Result<(), IdentityError> {
        create_tables_sqlite(&self.pool).await
    }

    /// Create or update a linked account, keyed on
    /// (service_type, service_id, account_id)
    pub async fn upsert_linked_account(
        &self,
        mut account: LinkedAccount,
    ) -> Result<LinkedAccount, IdentityError> {
        create_tables_sqlite(&self.pool).await?;

        if account.id.is_empty() {
            account.id = Uuid::new_v4().to_string();
        }
        account.updated_at = Utc::now();

        let table_name = DB_TABLE_LINKED_ACCOUNTS.as_str();
        sqlx::query(&format!(
            r#"
            INSERT INTO {table_name}
                (id, user_id, service_type, service_id, account_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(service_type, service_id, account_id)
            DO UPDATE SET user_id = excluded.user_id, updated_at = excluded.updated_at
            "#
        ))
        .bind(&account.id)
        .bind(&account.user_id)
        .bind(&account.service_type)
        .bind(&account.service_id)
        .bind(&account.account_id)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| IdentityError::Storage(e.to_string()))?;

        Ok(account)
    }

    /// Delete linked accounts matching the filter
    pub async fn delete_linked_accounts_by(
        &self,
        filter: &AccountFilter,
    ) -> Result<(), IdentityError> {
        create_tables_sqlite(&self.pool).await?;

        let table_name = DB_TABLE_LINKED_ACCOUNTS.as_str();
        let (where_clause, binds) = filter_where_sqlite(filter);
        let sql = format!("DELETE FROM {table_name}{where_clause}");

        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(value);
        }
        query
            .execute(&self.pool)
            .await
            .map_err(|e| IdentityError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl LinkedAccountStore for SqliteLinkedAccountStore {
    async fn list_accounts(
        &self,
        filter: &AccountFilter,
    ) -> Result<Vec<LinkedAccount>, IdentityError> {
        // Ensure tables exist before any operations
        create_tables_sqlite(&self.pool).await?;

        let table_name = DB_TABLE_LINKED_ACCOUNTS.as_str();
        let (where_clause, binds) = filter_where_sqlite(filter);
        let mut sql = format!("SELECT * FROM {table_name}{where_clause} ORDER BY created_at, id");
        if filter.limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query_as::<_, LinkedAccount>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        if let Some(limit) = filter.limit {
            query = query.bind(limit);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| IdentityError::Storage(e.to_string()))
    }
}

async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_LINKED_ACCOUNTS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            service_type TEXT NOT NULL,
            service_id TEXT NOT NULL,
            account_id TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            UNIQUE(service_type, service_id, account_id)
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))?;

    // Index on account_id for the lookup path
    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{}_account_id ON {}(account_id)
        "#,
        table_name.replace(".", "_"),
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))?;

    Ok(())
}

fn filter_where_sqlite(filter: &AccountFilter) -> (String, Vec<&str>) {
    let mut clauses = Vec::new();
    let mut binds = Vec::new();

    if let Some(account_id) = filter.account_id.as_deref() {
        clauses.push("account_id = ?");
        binds.push(account_id);
    }
    if let Some(service_type) = filter.service_type.as_deref() {
        clauses.push("service_type = ?");
        binds.push(service_type);
    }
    if let Some(service_id) = filter.service_id.as_deref() {
        clauses.push("service_id = ?");
        binds.push(service_id);
    }

    if clauses.is_empty() {
        (String::new(), binds)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), binds)
    }
}
