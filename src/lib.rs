//! authgate - client-side session management and navigation guarding.
//!
//! The library owns two collaborating pieces:
//!
//! - [`auth::SessionStore`]: the process-wide session (bearer token plus
//!   user profile), hydrated from the OS keychain at startup and mutated
//!   only by explicit login/logout/profile actions against the remote API.
//! - [`routing::NavigationGuard`]: a stateless check run before every
//!   route transition that redirects based on the target route's
//!   authentication requirement and the current session.
//!
//! Login and registration failures are never raised to the caller; they
//! come back as [`auth::ActionOutcome`] values carrying a displayable
//! message extracted from the API's error body.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod routing;

pub use api::{ApiClient, ApiError, AuthApi};
pub use auth::{ActionOutcome, KeyringTokenStore, Session, SessionStore, TokenStore};
pub use config::Config;
pub use models::{Credentials, NewAccount, UserProfile};
pub use routing::{GuardDecision, NavigationGuard, ResolvedRoute, Route, RouteTable};
