#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

/// A provisioned SQLite file in the temp dir, removed on drop.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub async fn provisioned(tag: &str) -> Self {
        let db = Self::unprovisioned(tag);
        acct_store::db::provision(&db.path)
            .await
            .expect("failed to provision temp database");
        db
    }

    /// A unique path with no file behind it.
    pub fn unprovisioned(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "acct-store-{}-{}-{}.sqlite",
            tag,
            std::process::id(),
            nanos
        ));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
