use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - credentials were rejected")]
    Unauthorized(Option<String>),

    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Error body shape used by the API: `{ "detail": "..." }`.
/// The field is optional; plenty of failures carry no body at all.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl ApiError {
    /// Build an error from a non-success HTTP status and its response body.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = Self::extract_detail(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized(detail),
            code => ApiError::Rejected {
                status: code,
                detail,
            },
        }
    }

    /// Pull the `detail` string out of a JSON error body, if present.
    fn extract_detail(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
    }

    /// The user-displayable message carried by the error response, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(detail) => detail.as_deref(),
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
