//! Session store: the single owner of the process-wide authentication state.

use tracing::{debug, info, warn};

use crate::api::{ApiError, AuthApi};
use crate::models::{Credentials, NewAccount, UserProfile};

use super::{Session, TokenStore};

/// Fallback shown when an error response carries no `detail` message.
const DEFAULT_FAILURE_MESSAGE: &str = "Authentication failed, please try again";

/// Outcome of a login or registration attempt.
///
/// These operations never surface an `Err` to the caller: every remote
/// failure is folded into `Failure` with a user-displayable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    Failure { message: String },
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success)
    }

    fn failure(err: &ApiError) -> Self {
        ActionOutcome::Failure {
            message: err
                .detail()
                .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}

/// Owns the session and performs the remote authentication operations.
///
/// Mutating operations take `&mut self`, so concurrent login/logout calls
/// are serialized by construction. The session is hydrated from the token
/// store when the store is created.
pub struct SessionStore<A: AuthApi, S: TokenStore> {
    api: A,
    store: S,
    session: Session,
}

impl<A: AuthApi, S: TokenStore> SessionStore<A, S> {
    /// Create the store, hydrating the token from persistent storage.
    /// A storage read failure degrades to an unauthenticated session.
    pub fn new(api: A, store: S) -> Self {
        let token = match store.get() {
            Ok(Some(token)) => {
                debug!("Hydrated session token from storage");
                token
            }
            Ok(None) => String::new(),
            Err(err) => {
                warn!(error = %err, "Failed to read persisted token, starting unauthenticated");
                String::new()
            }
        };

        Self {
            api,
            store,
            session: Session::new(token),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    /// Exchange credentials for a token, persist it, and kick off a
    /// profile fetch. On rejection the session is left untouched and the
    /// error message is returned for display.
    pub async fn login(&mut self, credentials: &Credentials) -> ActionOutcome {
        match self.api.login(credentials).await {
            Ok(token) => {
                self.session.token = token;
                // Persistence failure is not fatal: the token still lives
                // in memory for the rest of the process.
                if let Err(err) = self.store.set(&self.session.token) {
                    warn!(error = %err, "Failed to persist session token");
                }
                info!("Login succeeded");
                self.fetch_profile().await;
                ActionOutcome::Success
            }
            Err(err) => {
                debug!(error = %err, "Login rejected");
                ActionOutcome::failure(&err)
            }
        }
    }

    /// Create a remote account. Never touches session state.
    pub async fn register(&mut self, account: &NewAccount) -> ActionOutcome {
        match self.api.register(account).await {
            Ok(()) => {
                info!(username = %account.username, "Registration succeeded");
                ActionOutcome::Success
            }
            Err(err) => {
                debug!(error = %err, "Registration rejected");
                ActionOutcome::failure(&err)
            }
        }
    }

    /// Fetch the current user's profile with the stored token.
    ///
    /// Fire-and-forget from the caller's perspective: a failure is logged
    /// and the session is left unchanged.
    pub async fn fetch_profile(&mut self) {
        if self.session.token.is_empty() {
            debug!("Skipping profile fetch without a token");
            return;
        }

        match self.api.me(&self.session.token).await {
            Ok(profile) => {
                debug!(username = %profile.username, "Profile fetched");
                self.session.user = Some(profile);
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch failed");
            }
        }
    }

    /// Clear the in-memory session and the persisted token. No remote
    /// call, and never fails from the caller's perspective.
    pub fn logout(&mut self) {
        self.session.clear();
        if let Err(err) = self.store.remove() {
            warn!(error = %err, "Failed to remove persisted token");
        }
        info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::StatusCode;

    use super::*;
    use crate::auth::MemoryTokenStore;

    /// Scripted API stub recording which calls were issued.
    #[derive(Default)]
    struct StubApi {
        login_response: Mutex<Option<Result<String, ApiError>>>,
        register_response: Mutex<Option<Result<(), ApiError>>>,
        me_response: Mutex<Option<Result<UserProfile, ApiError>>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl StubApi {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AuthApi for &StubApi {
        async fn login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
            self.record("login");
            self.login_response
                .lock()
                .unwrap()
                .take()
                .expect("login not scripted")
        }

        async fn register(&self, _account: &NewAccount) -> Result<(), ApiError> {
            self.record("register");
            self.register_response
                .lock()
                .unwrap()
                .take()
                .expect("register not scripted")
        }

        async fn me(&self, _token: &str) -> Result<UserProfile, ApiError> {
            self.record("me");
            self.me_response
                .lock()
                .unwrap()
                .take()
                .expect("me not scripted")
        }
    }

    fn profile(username: &str) -> UserProfile {
        UserProfile {
            username: username.to_string(),
            email: None,
        }
    }

    fn rejection(body: &str) -> ApiError {
        ApiError::from_status(StatusCode::UNAUTHORIZED, body)
    }

    #[tokio::test]
    async fn test_login_success_stores_and_persists_token() {
        let api = StubApi::default();
        *api.login_response.lock().unwrap() = Some(Ok("abc".to_string()));
        *api.me_response.lock().unwrap() = Some(Ok(profile("reader")));

        let tokens = MemoryTokenStore::default();
        let mut store = SessionStore::new(&api, tokens.clone());

        let outcome = store.login(&Credentials::new("hunter2")).await;

        assert_eq!(outcome, ActionOutcome::Success);
        assert_eq!(store.session().token, "abc");
        assert_eq!(tokens.get().unwrap(), Some("abc".to_string()));
        // A profile fetch was issued after the token landed.
        assert_eq!(api.calls(), vec!["login", "me"]);
        assert_eq!(store.user(), Some(&profile("reader")));
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_detail_message() {
        let api = StubApi::default();
        *api.login_response.lock().unwrap() = Some(Err(rejection(r#"{"detail":"bad password"}"#)));

        let tokens = MemoryTokenStore::default();
        let mut store = SessionStore::new(&api, tokens.clone());

        let outcome = store.login(&Credentials::new("wrong")).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failure {
                message: "bad password".to_string()
            }
        );
        assert!(!store.is_authenticated());
        assert_eq!(tokens.get().unwrap(), None);
        assert_eq!(api.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn test_login_rejection_without_detail_uses_fallback() {
        let api = StubApi::default();
        *api.login_response.lock().unwrap() = Some(Err(rejection("")));

        let mut store = SessionStore::new(&api, MemoryTokenStore::default());

        match store.login(&Credentials::new("wrong")).await {
            ActionOutcome::Failure { message } => {
                assert_eq!(message, DEFAULT_FAILURE_MESSAGE);
            }
            ActionOutcome::Success => panic!("login should have failed"),
        }
    }

    #[tokio::test]
    async fn test_login_succeeds_even_if_profile_fetch_fails() {
        let api = StubApi::default();
        *api.login_response.lock().unwrap() = Some(Ok("abc".to_string()));
        *api.me_response.lock().unwrap() = Some(Err(rejection("")));

        let mut store = SessionStore::new(&api, MemoryTokenStore::default());

        let outcome = store.login(&Credentials::new("hunter2")).await;

        assert_eq!(outcome, ActionOutcome::Success);
        assert!(store.is_authenticated());
        assert_eq!(store.user(), None);
    }

    #[tokio::test]
    async fn test_register_never_mutates_session() {
        let account = NewAccount {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let api = StubApi::default();
        *api.register_response.lock().unwrap() = Some(Ok(()));
        let mut store = SessionStore::new(&api, MemoryTokenStore::default());
        assert_eq!(store.register(&account).await, ActionOutcome::Success);
        assert_eq!(store.session(), &Session::default());

        let api = StubApi::default();
        *api.register_response.lock().unwrap() =
            Some(Err(rejection(r#"{"detail":"username taken"}"#)));
        let mut store = SessionStore::new(&api, MemoryTokenStore::default());
        assert_eq!(
            store.register(&account).await,
            ActionOutcome::Failure {
                message: "username taken".to_string()
            }
        );
        assert_eq!(store.session(), &Session::default());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_persisted_token() {
        let tokens = MemoryTokenStore::default();
        tokens.set("abc").unwrap();

        let api = StubApi::default();
        let mut store = SessionStore::new(&api, tokens.clone());
        assert!(store.is_authenticated());

        store.logout();

        assert_eq!(store.session().token, "");
        assert_eq!(store.user(), None);
        assert_eq!(tokens.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_from_unauthenticated_state_is_harmless() {
        let api = StubApi::default();
        let mut store = SessionStore::new(&api, MemoryTokenStore::default());

        store.logout();

        assert_eq!(store.session(), &Session::default());
    }

    #[tokio::test]
    async fn test_hydration_picks_up_persisted_token() {
        let tokens = MemoryTokenStore::default();
        tokens.set("persisted").unwrap();

        let api = StubApi::default();
        let store = SessionStore::new(&api, tokens);

        assert!(store.is_authenticated());
        assert_eq!(store.session().token, "persisted");
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_is_silent() {
        let tokens = MemoryTokenStore::default();
        tokens.set("abc").unwrap();

        let api = StubApi::default();
        *api.me_response.lock().unwrap() = Some(Err(rejection("")));
        let mut store = SessionStore::new(&api, tokens);

        store.fetch_profile().await;

        assert!(store.is_authenticated());
        assert_eq!(store.user(), None);
    }

    #[tokio::test]
    async fn test_profile_fetch_skipped_without_token() {
        let api = StubApi::default();
        let mut store = SessionStore::new(&api, MemoryTokenStore::default());

        store.fetch_profile().await;

        assert_eq!(api.calls(), Vec::<&str>::new());
    }
}
