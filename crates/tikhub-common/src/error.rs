use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the TikHub API
#[derive(Error, Debug)]
pub enum TikHubError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A documented status arrived but its body did not match the schema
    #[error("HTTP {} but failed to decode JSON: {source}; body: {}", .status.as_u16(), String::from_utf8_lossy(.content))]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
        content: Bytes,
    },

    /// The server answered with a status the endpoint does not document
    #[error("Unexpected status code: {}\n\nResponse content:\n{}", .status.as_u16(), String::from_utf8_lossy(.content))]
    UnexpectedStatus { status: StatusCode, content: Bytes },

    /// A configured header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The configured base URL does not parse
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// No API key was configured
    #[error("Authentication missing: no TikHub API key provided")]
    AuthenticationMissing,

    /// An environment variable read by the client is missing or not unicode
    #[error("Environment variable {name}: {source}")]
    Env {
        name: &'static str,
        #[source]
        source: std::env::VarError,
    },
}

impl TikHubError {
    /// Status code of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Decode { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
