//! Store-scoped client for the payment request resource

use crate::config::ClientConfig;
use crate::http_transport::HttpTransport;
use crate::payment_request::{PaymentRequest, PaymentRequestRequest};
use crate::transport::Transport;
use crate::{BtcPayError, Result};
use http::{Method, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Collection path of the payment request resource
pub const PAYMENT_REQUESTS_PATH: &str = "payment-requests";

/// Characters escaped when an id is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Outcome of classifying a response status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Success,
    Unauthenticated,
    Forbidden,
    BadRequest,
    NotFound,
    Unexpected(u16),
}

impl StatusClass {
    pub(crate) fn classify(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => StatusClass::Success,
            // 401 is named "Unauthorized" by HTTP but means the caller is not authenticated
            StatusCode::UNAUTHORIZED => StatusClass::Unauthenticated,
            StatusCode::FORBIDDEN => StatusClass::Forbidden,
            StatusCode::BAD_REQUEST => StatusClass::BadRequest,
            StatusCode::NOT_FOUND => StatusClass::NotFound,
            other => StatusClass::Unexpected(other.as_u16()),
        }
    }

    /// Turn the classification into the body to decode or the matching error
    pub(crate) fn into_result(self, body: Vec<u8>) -> Result<Vec<u8>> {
        match self {
            StatusClass::Success => Ok(body),
            StatusClass::Unauthenticated => Err(BtcPayError::Unauthenticated),
            StatusClass::Forbidden => Err(BtcPayError::Forbidden),
            StatusClass::BadRequest => Err(BtcPayError::BadRequest {
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            StatusClass::NotFound => Err(BtcPayError::NotFound),
            StatusClass::Unexpected(status) => Err(BtcPayError::UnexpectedStatus { status }),
        }
    }
}

/// Client for one BTCPay store.
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct Store {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("transport", &"<transport>")
            .finish()
    }
}

impl Store {
    /// Create a store client over any transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    /// Create a store client over a shared transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a store client using the default HTTP transport
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }

    /// Create a payment request
    pub async fn create_payment_request(
        &self,
        request: &PaymentRequestRequest,
    ) -> Result<PaymentRequest> {
        let payload = serde_json::to_vec(request).map_err(BtcPayError::Encode)?;
        self.send_json(Method::POST, PAYMENT_REQUESTS_PATH, Some(payload))
            .await
    }

    /// Get a payment request by id
    pub async fn get_payment_request(&self, id: &str) -> Result<PaymentRequest> {
        let path = format!("{}/{}", PAYMENT_REQUESTS_PATH, encode_segment(id));
        self.send_json(Method::GET, &path, None).await
    }

    /// Shared request path: send, drain the body, classify, decode
    async fn send_json<Res>(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Res>
    where
        Res: DeserializeOwned,
    {
        debug!(%method, path, "sending store API request");

        let response = self
            .transport
            .do_request(method, path, body)
            .await
            .map_err(BtcPayError::Transport)?;

        let status = response.status();
        let body = response.read_body().await.map_err(BtcPayError::Transport)?;

        let class = StatusClass::classify(status);
        debug!(status = status.as_u16(), ?class, path, "store API response");

        let body = class.into_result(body)?;
        serde_json::from_slice(&body).map_err(BtcPayError::Decode)
    }
}
