use serde::{Deserialize, Serialize};

/// Login request body. The upstream API authenticates with a single
/// shared password rather than per-user accounts.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub password: String,
}

impl Credentials {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

/// Registration request body for creating a new remote account.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Profile record for the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
