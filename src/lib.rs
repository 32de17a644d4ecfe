pub mod config;
pub mod db;
pub mod error;

pub use db::{AccountType, AccountTypeRepository, User, UserRepository};
pub use error::StoreError;
