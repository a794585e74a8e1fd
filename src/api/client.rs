//! API client for the remote authentication endpoints.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Credentials, NewAccount, UserProfile};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: String,
}

/// The remote authentication surface consumed by the session store.
///
/// Implemented by `ApiClient` over HTTP; tests substitute a scripted stub.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// Create a new remote account. No session state is involved.
    async fn register(&self, account: &NewAccount) -> Result<(), ApiError>;

    /// Fetch the profile of the user the token belongs to.
    async fn me(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// API client for the authentication endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let url = self.url("/auth/login");
        debug!(url = %url, "Sending login request");

        let response = self.client.post(&url).json(credentials).send().await?;
        let response = Self::check_response(response).await?;

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("login response: {e}")))?;

        Ok(login.access_token)
    }

    async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        let url = self.url("/auth/register");
        debug!(url = %url, username = %account.username, "Sending registration request");

        let response = self.client.post(&url).json(account).send().await?;
        Self::check_response(response).await?;

        Ok(())
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.url("/auth/me");
        debug!(url = %url, "Fetching current user profile");

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("profile response: {e}")))
    }
}
