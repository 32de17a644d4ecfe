use crate::db::DEFAULT_DB_PATH;
use crate::db::models::AccountType;
use crate::db::sqlite::SqliteFile;
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use tracing::debug;

const TABLE: &str = "ACCOUNT_TYPE";

/// CRUD over the `ACCOUNT_TYPE` table. Every call opens its own connection.
#[derive(Debug, Clone)]
pub struct AccountTypeRepository {
    db: SqliteFile,
}

impl Default for AccountTypeRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl AccountTypeRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db: SqliteFile::new(db_path),
        }
    }

    pub fn db_path(&self) -> &Path {
        self.db.path()
    }

    /// Insert a new account type. A duplicate key fails with a unique-constraint error.
    pub async fn create(&self, account_type: &str, type_name: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, account_type, type_name, "insert");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("INSERT INTO ACCOUNT_TYPE (account_type, type_name) VALUES (?, ?)")
            .bind(account_type)
            .bind(type_name)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "insert done");
        Ok(())
    }

    pub async fn get_by_id(&self, account_type: &str) -> Result<Option<AccountType>, StoreError> {
        debug!(table = TABLE, account_type, "select by id");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query_as::<_, AccountType>(
            "SELECT account_type, type_name FROM ACCOUNT_TYPE WHERE account_type = ?",
        )
        .bind(account_type)
        .fetch_optional(&mut conn)
        .await;
        self.db.release(conn, outcome).await
    }

    /// `type_name` is not unique; the first row SQLite yields wins.
    pub async fn get_by_name(&self, type_name: &str) -> Result<Option<AccountType>, StoreError> {
        debug!(table = TABLE, type_name, "select by name");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query_as::<_, AccountType>(
            "SELECT account_type, type_name FROM ACCOUNT_TYPE WHERE type_name = ?",
        )
        .bind(type_name)
        .fetch_optional(&mut conn)
        .await;
        self.db.release(conn, outcome).await
    }

    /// Rename an account type. Does nothing if the key is absent.
    pub async fn update_name(&self, account_type: &str, new_name: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, account_type, new_name, "update name");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("UPDATE ACCOUNT_TYPE SET type_name = ? WHERE account_type = ?")
            .bind(new_name)
            .bind(account_type)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "update done");
        Ok(())
    }

    pub async fn delete(&self, account_type: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, account_type, "delete");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("DELETE FROM ACCOUNT_TYPE WHERE account_type = ?")
            .bind(account_type)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "delete done");
        Ok(())
    }

    /// All rows, in whatever order SQLite returns them.
    pub async fn list_all(&self) -> Result<Vec<AccountType>, StoreError> {
        debug!(table = TABLE, "select all");
        let mut conn = self.db.open().await?;
        let outcome =
            sqlx::query_as::<_, AccountType>("SELECT account_type, type_name FROM ACCOUNT_TYPE")
                .fetch_all(&mut conn)
                .await;
        self.db.release(conn, outcome).await
    }
}
