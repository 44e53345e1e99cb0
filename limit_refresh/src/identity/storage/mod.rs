mod config;
mod postgres;
mod sqlite;

pub use postgres::PostgresLinkedAccountStore;
pub use sqlite::SqliteLinkedAccountStore;
