use crate::models::UserProfile;

/// The authentication state held by the current process.
///
/// An empty token means unauthenticated; the profile is only ever present
/// after a successful fetch and is cleared together with the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: String) -> Self {
        Self { token, user: None }
    }

    /// Whether the session holds a credential. Derived from the token on
    /// every call, never cached.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Drop both the token and the profile.
    pub fn clear(&mut self) {
        self.token.clear();
        self.user = None;
    }
}
