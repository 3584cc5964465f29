//! Configuration for the default HTTP transport

use crate::{BtcPayError, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the server base URL
pub const ENV_URL: &str = "BTCPAY_URL";
/// Environment variable holding the store id
pub const ENV_STORE_ID: &str = "BTCPAY_STORE_ID";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BTCPAY_API_KEY";

/// Connection settings for one BTCPay store
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the BTCPay server
    pub url: String,
    /// Store id the API calls are scoped to
    pub store_id: String,
    /// Greenfield API key, sent as `Authorization: token <key>`
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("store_id", &self.store_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(url: impl Into<String>, store_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            store_id: store_id.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Build a config from `BTCPAY_URL`, `BTCPAY_STORE_ID` and the optional
    /// `BTCPAY_API_KEY`
    pub fn from_env() -> Result<Self> {
        use std::env;

        let url = env::var(ENV_URL).map_err(|_| {
            BtcPayError::config(format!(
                "Missing required {} environment variable",
                ENV_URL
            ))
        })?;
        let store_id = env::var(ENV_STORE_ID).map_err(|_| {
            BtcPayError::config(format!(
                "Missing required {} environment variable",
                ENV_STORE_ID
            ))
        })?;

        let mut config = Self::new(url, store_id);
        config.api_key = env::var(ENV_API_KEY).ok().filter(|key| !key.is_empty());
        config.validate()?;
        Ok(config)
    }

    /// Validate the client configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(BtcPayError::config("Server URL cannot be empty"));
        }

        let url = Url::parse(&self.url)
            .map_err(|e| BtcPayError::config(format!("Invalid server URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(BtcPayError::config(
                "Server URL must start with http:// or https://",
            ));
        }

        if self.store_id.trim().is_empty() {
            return Err(BtcPayError::config("Store id cannot be empty"));
        }

        Ok(())
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Root of the store-scoped Greenfield API, always ending in `/`
    pub(crate) fn store_api_root(&self) -> Result<Url> {
        let base = Url::parse(&self.url)
            .map_err(|e| BtcPayError::config(format!("Invalid server URL: {}", e)))?;
        let root = format!(
            "{}/api/v1/stores/{}/",
            base.as_str().trim_end_matches('/'),
            crate::client::encode_segment(&self.store_id)
        );
        Url::parse(&root).map_err(|e| BtcPayError::config(format!("Invalid store URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(ClientConfig::new("https://btcpay.example.com", "store1")
            .validate()
            .is_ok());
        assert!(ClientConfig::new("", "store1").validate().is_err());
        assert!(ClientConfig::new("ftp://btcpay.example.com", "store1")
            .validate()
            .is_err());
        assert!(ClientConfig::new("not a url", "store1").validate().is_err());
        assert!(ClientConfig::new("https://btcpay.example.com", " ")
            .validate()
            .is_err());
    }

    #[test]
    fn test_store_api_root() {
        let config = ClientConfig::new("https://btcpay.example.com/", "store1");
        assert_eq!(
            config.store_api_root().unwrap().as_str(),
            "https://btcpay.example.com/api/v1/stores/store1/"
        );

        let config = ClientConfig::new("https://example.com/btcpay", "store1");
        assert_eq!(
            config.store_api_root().unwrap().as_str(),
            "https://example.com/btcpay/api/v1/stores/store1/"
        );
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_URL, "https://btcpay.example.com");
        std::env::set_var(ENV_STORE_ID, "store-from-env");
        std::env::set_var(ENV_API_KEY, "env-key");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.url, "https://btcpay.example.com");
        assert_eq!(config.store_id, "store-from-env");
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert!(config.timeout.is_none());

        std::env::remove_var(ENV_STORE_ID);
        assert!(matches!(
            ClientConfig::from_env(),
            Err(BtcPayError::Config { .. })
        ));

        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_API_KEY);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("https://btcpay.example.com", "store1")
            .with_api_key("secret-key")
            .with_timeout(Duration::from_secs(5));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
