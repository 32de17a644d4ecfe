//! Database module: typed rows and per-table repositories over a SQLite file.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, column order fixed by field order
//! - `schema.rs`: SQL DDL for provisioning a fresh database file
//! - `sqlite.rs`: per-call connection acquisition and release
//! - `account_type.rs` / `user.rs`: one repository per table

pub mod account_type;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod user;

pub use account_type::AccountTypeRepository;
pub use models::{AccountType, User};
pub use schema::{SQLITE_INIT, provision};
pub use sqlite::SqliteFile;
pub use user::UserRepository;

/// Database file used when no path is given.
pub const DEFAULT_DB_PATH: &str = "622_final.db";
