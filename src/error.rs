use thiserror::Error;

/// Errors returned by the StatHub REST boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API url {url}: {details}")]
    InvalidUrl { url: String, details: String },

    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },

    #[error("could not decode response from {endpoint}: {details}")]
    Decode { endpoint: String, details: String },
}

impl ApiError {
    /// HTTP status code for errors the backend answered with
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Detail used when the backend sends no `detail` field
pub const DEFAULT_ERROR_DETAIL: &str = "Request failed";
