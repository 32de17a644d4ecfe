use crate::error::StoreError;
use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// A SQLite database file, opened fresh for every statement.
///
/// There is no pool: each repository call goes through [`SqliteFile::open`]
/// and hands the connection back to [`SqliteFile::release`], which closes it
/// whether the statement succeeded or not. A connection dropped on an early
/// return is closed by sqlx's `Drop`.
#[derive(Debug, Clone)]
pub struct SqliteFile {
    path: PathBuf,
}

impl SqliteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection. The file must already exist: a missing file is a
    /// CANTOPEN error here rather than an empty database created on the fly.
    pub async fn open(&self) -> Result<SqliteConnection, StoreError> {
        let opts = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(false);
        let conn = SqliteConnection::connect_with(&opts).await?;
        trace!(path = %self.path.display(), "sqlite connection opened");
        Ok(conn)
    }

    /// Close `conn`, then return the statement outcome.
    ///
    /// A statement error takes precedence over a close error.
    pub async fn release<T>(
        &self,
        conn: SqliteConnection,
        outcome: Result<T, sqlx::Error>,
    ) -> Result<T, StoreError> {
        let closed = conn.close().await;
        trace!(path = %self.path.display(), "sqlite connection closed");
        match (outcome, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(close_err)) => Err(close_err.into()),
            (Err(e), Ok(())) => Err(e.into()),
            (Err(e), Err(close_err)) => {
                warn!(error = %close_err, "failed to close sqlite connection after error");
                Err(e.into())
            }
        }
    }
}
