//! Error types for the btcpay client

use crate::transport::TransportError;
use thiserror::Error;

/// Result type alias for btcpay operations
pub type Result<T> = std::result::Result<T, BtcPayError>;

/// Main error type for btcpay operations
#[derive(Error, Debug)]
pub enum BtcPayError {
    /// The transport failed before a response was available (connection,
    /// DNS, timeout). The inner error is the transport's own, unmodified.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// HTTP 401: no credentials or invalid credentials were presented
    #[error("Unauthenticated: missing or invalid credentials")]
    Unauthenticated,

    /// HTTP 403: credentials are valid but lack the required permission
    #[error("Forbidden: insufficient permissions")]
    Forbidden,

    /// HTTP 400: the server rejected the request payload
    #[error("Bad request: {body}")]
    BadRequest { body: String },

    /// HTTP 404: the requested resource does not exist
    #[error("Not found")]
    NotFound,

    /// Any status code outside the classified set
    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BtcPayError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap any transport-level failure
    pub fn transport<E>(error: E) -> Self
    where
        E: Into<TransportError>,
    {
        Self::Transport(error.into())
    }

    /// Whether this error came from classifying a non-success HTTP status
    pub fn is_status_error(&self) -> bool {
        self.status().is_some()
    }

    /// The HTTP status code that produced this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated => Some(401),
            Self::Forbidden => Some(403),
            Self::BadRequest { .. } => Some(400),
            Self::NotFound => Some(404),
            Self::UnexpectedStatus { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) | Self::Config { .. } => None,
        }
    }
}
