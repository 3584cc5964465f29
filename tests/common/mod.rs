//! Shared helpers for integration tests

use async_trait::async_trait;
use btcpay::{BufferedResponse, Transport, TransportError, TransportResponse};
use http::{Method, StatusCode};
use std::sync::{Arc, Mutex};

/// A request as seen by the stub transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().expect("request had no body"))
            .expect("request body is not JSON")
    }
}

enum Reply {
    Response(BufferedResponse),
    Failure(String),
}

/// Transport returning a fixed reply and recording every request
#[derive(Clone)]
pub struct StubTransport {
    reply: Arc<Reply>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubTransport {
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status = StatusCode::from_u16(status).expect("invalid status code");
        Self::with_reply(Reply::Response(BufferedResponse::new(status, body)))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(reply),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Box<dyn TransportResponse>, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        match self.reply.as_ref() {
            Reply::Response(response) => Ok(response.clone().boxed()),
            Reply::Failure(message) => Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.clone(),
            )
            .into()),
        }
    }
}

pub const PENDING_BODY: &str =
    r#"{"id":"abc","status":"Pending","amount":10.5,"currency":"USD","title":"Invoice 1"}"#;
