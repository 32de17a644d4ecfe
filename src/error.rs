use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Primary SQLite result code for `SQLITE_CANTOPEN`: missing file, directory, or no permission.
const SQLITE_CANTOPEN: i32 = 14;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl StoreError {
    /// True when the storage engine rejected a write on a UNIQUE / PRIMARY KEY constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Database(SqlxError::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    /// True when SQLite could not open the database file at all.
    /// Extended codes (`SQLITE_CANTOPEN_ISDIR`, ...) carry the primary code in the low byte.
    pub fn is_cannot_open(&self) -> bool {
        match self {
            StoreError::Database(SqlxError::Database(db_err)) => db_err
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| code & 0xff == SQLITE_CANTOPEN),
            _ => false,
        }
    }
}
