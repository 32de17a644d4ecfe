//! SQL DDL for the two tables the repositories read and write.
//! The repositories assume these tables already exist; `provision` is for
//! setting up a fresh file (binary start-up, tests).

use crate::error::StoreError;
use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use std::path::Path;
use tracing::info;

/// SQLite schema with:
/// - `ACCOUNT_TYPE` keyed by the account type code
/// - `USER` keyed by user id; `username` is not unique
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS ACCOUNT_TYPE (
    account_type TEXT PRIMARY KEY,
    type_name TEXT
);

CREATE TABLE IF NOT EXISTS USER (
    user_id TEXT PRIMARY KEY,
    username TEXT,
    pw TEXT
);
"#;

/// Create the database file if missing and apply `SQLITE_INIT`.
pub async fn provision(path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&opts).await?;

    // sqlx::query runs a single statement, so apply them one at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut conn).await?;
    }

    conn.close().await?;
    info!(path = %path.display(), "database schema provisioned");
    Ok(())
}
