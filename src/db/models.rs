use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `ACCOUNT_TYPE`. Only the key column is NOT NULL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, FromRow)]
pub struct AccountType {
    pub account_type: String,
    pub type_name: Option<String>,
}

/// One row of `USER`. `pw` holds whatever the caller stored; nothing is hashed here.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, FromRow)]
pub struct User {
    pub user_id: String,
    pub username: Option<String>,
    pub pw: Option<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("pw", &self.pw.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
