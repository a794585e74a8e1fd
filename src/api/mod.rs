//! REST API client module for the authentication endpoints.
//!
//! This module provides the `ApiClient` for communicating with the
//! remote authentication API: login, registration, and profile lookup.
//!
//! The API uses JWT bearer token authentication obtained through the
//! `/auth/login` endpoint. The `AuthApi` trait is the seam between the
//! session store and the network so session logic can be exercised
//! against a stub.

pub mod client;
pub mod error;

pub use client::{ApiClient, AuthApi};
pub use error::ApiError;
