use thiserror::Error;

/// Errors produced by the data-source adapters.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No authenticated session is available for the request.
    #[error("no session is present")]
    NoSession,
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed")]
    Client(#[source] reqwest::Error),
    /// The request never produced a response (connect, timeout, TLS).
    #[error("request to {path} failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status code.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    /// The response body was not the expected JSON document.
    #[error("invalid JSON from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The payload was well-formed but reported a failure.
    #[error("data source rejected the request: {message}")]
    Rejected { message: String },
}

impl ApiError {
    /// Return whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport { .. } => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
