//! Transport seam consumed by the resource client
//!
//! The client never builds connections, resolves base URLs or attaches
//! credentials itself. It hands a method, a path relative to the store API
//! root and an optional JSON body to a [`Transport`], and gets back a
//! [`TransportResponse`] it drains exactly once.

use async_trait::async_trait;
use http::{Method, StatusCode};

/// Error produced by a transport, passed to callers unmodified
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Performs HTTP calls against the store API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue `method` against `path` (relative, e.g. `payment-requests/abc`)
    /// with an optional JSON body.
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Box<dyn TransportResponse>, TransportError>;
}

/// A response whose body has not been read yet.
///
/// `read_body` takes the response by value; whatever handle backs it is
/// dropped once the body is read or the read fails.
#[async_trait]
pub trait TransportResponse: Send {
    /// HTTP status code of the response
    fn status(&self) -> StatusCode;

    /// Read the entire body, releasing the response
    async fn read_body(self: Box<Self>) -> Result<Vec<u8>, TransportError>;
}

/// A response whose body is already in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl BufferedResponse {
    /// Create a buffered response
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Box the response for returning from [`Transport::do_request`]
    pub fn boxed(self) -> Box<dyn TransportResponse> {
        Box::new(self)
    }
}

#[async_trait]
impl TransportResponse for BufferedResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    async fn read_body(self: Box<Self>) -> Result<Vec<u8>, TransportError> {
        Ok(self.body)
    }
}
