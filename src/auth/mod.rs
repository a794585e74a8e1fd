//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `Session`: the in-memory token and profile for the current process
//! - `TokenStore`: persistent storage for the token, backed by the OS keychain
//! - `SessionStore`: login/logout/register/profile operations over the API
//!
//! The session is hydrated from the token store at startup and mutated only
//! by explicit user actions.

pub mod session;
pub mod store;
pub mod token_store;

pub use session::Session;
pub use store::{ActionOutcome, SessionStore};
pub use token_store::{KeyringTokenStore, MemoryTokenStore, TokenStore};
