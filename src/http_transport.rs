//! Default `reqwest` transport for the store-scoped Greenfield API

use crate::config::ClientConfig;
use crate::transport::{Transport, TransportError, TransportResponse};
use crate::{BtcPayError, Result};
use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use reqwest::{Client, Url};

/// Sends requests to `{url}/api/v1/stores/{store_id}/{path}`
#[derive(Clone)]
pub struct HttpTransport {
    /// Store API root, ending in `/`
    root: Url,
    /// HTTP client
    client: Client,
    /// Headers sent with every request
    headers: HeaderMap,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("root", &self.root.as_str())
            .field("headers", &"<redacted>")
            .finish()
    }
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client_builder = Client::builder();
        Self::with_client(config, client_builder)
    }

    /// Create a transport from a preconfigured `reqwest` builder
    pub fn with_client(config: ClientConfig, mut client_builder: reqwest::ClientBuilder) -> Result<Self> {
        config.validate()?;

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| BtcPayError::config(format!("Failed to create HTTP client: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("token {}", api_key))
                .map_err(|e| BtcPayError::config(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self {
            root: config.store_api_root()?,
            client,
            headers,
        })
    }

    /// Get the store API root this transport resolves paths against
    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    fn resolve(&self, path: &str) -> std::result::Result<Url, TransportError> {
        Ok(self.root.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> std::result::Result<Box<dyn TransportResponse>, TransportError> {
        let url = self.resolve(path)?;

        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers.clone());

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = request.send().await?;
        Ok(Box::new(HttpResponse(response)))
    }
}

/// Response backed by a live `reqwest` connection
struct HttpResponse(reqwest::Response);

#[async_trait]
impl TransportResponse for HttpResponse {
    fn status(&self) -> StatusCode {
        self.0.status()
    }

    async fn read_body(self: Box<Self>) -> std::result::Result<Vec<u8>, TransportError> {
        let bytes = self.0.bytes().await?;
        Ok(bytes.to_vec())
    }
}
