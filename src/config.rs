use crate::db::DEFAULT_DB_PATH;
use crate::error::StoreError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variables with this prefix override the defaults,
/// e.g. `ACCT_STORE_DATABASE_PATH`, `ACCT_STORE_LOGLEVEL`.
pub const ENV_PREFIX: &str = "ACCT_STORE_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, StoreError> {
        Ok(Self::figment().extract()?)
    }
}
