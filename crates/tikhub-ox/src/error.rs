use thiserror::Error;

// Re-export the shared transport error from tikhub-common
pub use tikhub_common::error::TikHubError;

/// Type alias used throughout the client API
pub type TikHubRequestError = TikHubError;

/// Problems with the loosely typed parameters of a [`crate::RawRequest`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawRequestError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("{endpoint}: missing required parameter `{name}`")]
    MissingParam {
        endpoint: &'static str,
        name: &'static str,
    },

    #[error("{endpoint}: undocumented parameter `{name}`")]
    UnknownParam { endpoint: &'static str, name: String },

    #[error("parameter `{name}` expects {kind}, got `{value}`")]
    InvalidValue {
        name: String,
        kind: &'static str,
        value: String,
    },

    #[error("expected key=value, got `{0}`")]
    MalformedPair(String),
}
