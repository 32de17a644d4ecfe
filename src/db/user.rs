use crate::db::DEFAULT_DB_PATH;
use crate::db::models::User;
use crate::db::sqlite::SqliteFile;
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use tracing::debug;

const TABLE: &str = "USER";

/// CRUD over the `USER` table. Passwords are stored and returned as given.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: SqliteFile,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl UserRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db: SqliteFile::new(db_path),
        }
    }

    pub fn db_path(&self) -> &Path {
        self.db.path()
    }

    pub async fn create(&self, user_id: &str, username: &str, pw: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, user_id, username, "insert");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("INSERT INTO USER (user_id, username, pw) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(username)
            .bind(pw)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "insert done");
        Ok(())
    }

    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        debug!(table = TABLE, user_id, "select by id");
        let mut conn = self.db.open().await?;
        let outcome =
            sqlx::query_as::<_, User>("SELECT user_id, username, pw FROM USER WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&mut conn)
                .await;
        self.db.release(conn, outcome).await
    }

    /// Usernames may repeat; returns the first match SQLite yields.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        debug!(table = TABLE, username, "select by username");
        let mut conn = self.db.open().await?;
        let outcome =
            sqlx::query_as::<_, User>("SELECT user_id, username, pw FROM USER WHERE username = ?")
                .bind(username)
                .fetch_optional(&mut conn)
                .await;
        self.db.release(conn, outcome).await
    }

    pub async fn update_password(&self, user_id: &str, new_pw: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, user_id, "update password");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("UPDATE USER SET pw = ? WHERE user_id = ?")
            .bind(new_pw)
            .bind(user_id)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "update done");
        Ok(())
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), StoreError> {
        debug!(table = TABLE, user_id, "delete");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query("DELETE FROM USER WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut conn)
            .await;
        let done = self.db.release(conn, outcome).await?;
        debug!(table = TABLE, rows_affected = done.rows_affected(), "delete done");
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        debug!(table = TABLE, "select all");
        let mut conn = self.db.open().await?;
        let outcome = sqlx::query_as::<_, User>("SELECT user_id, username, pw FROM USER")
            .fetch_all(&mut conn)
            .await;
        self.db.release(conn, outcome).await
    }
}
