//! Data models for the authentication API.
//!
//! - `Credentials`: the login request body (the API is single-password)
//! - `NewAccount`: the registration request body
//! - `UserProfile`: the record returned by the `/auth/me` endpoint

pub mod user;

pub use user::{Credentials, NewAccount, UserProfile};
