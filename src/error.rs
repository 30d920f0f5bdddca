//! Error types for the Spotify catalog client.

use thiserror::Error;

use crate::api::TransportError;

/// Main error type for all catalog operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The access token was rejected. Refresh it and retry the call.
    #[error("Access token expired or invalid")]
    AccessTokenExpired,

    /// Request failed for any reason other than rejected credentials.
    #[error("Request failed{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    /// Payload did not have the shape the operation expects.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Caller input rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SpotifyError {
    /// Shorthand for building a [`SpotifyError::Mapping`].
    pub fn mapping<S: Into<String>>(message: S) -> Self {
        SpotifyError::Mapping(message.into())
    }
}

impl From<TransportError> for SpotifyError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unauthorized => SpotifyError::AccessTokenExpired,
            TransportError::Failed { status, message } => {
                SpotifyError::RequestFailed { status, message }
            }
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
