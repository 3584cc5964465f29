//! # btcpay - payment request client
//!
//! Typed bindings for the payment request resource of the BTCPay Server
//! Greenfield API. A [`Store`] serializes requests, hands them to a
//! [`Transport`], and maps the response status and body back into a
//! [`PaymentRequest`] or a [`BtcPayError`].

pub mod client;
pub mod config;
pub mod error;
pub mod http_transport;
pub mod payment_request;
pub mod transport;

// Re-exports for convenience
pub use client::Store;
pub use config::ClientConfig;
pub use error::{BtcPayError, Result};
pub use http_transport::HttpTransport;
pub use payment_request::{PaymentRequest, PaymentRequestRequest, PaymentRequestStatus};
pub use transport::{BufferedResponse, Transport, TransportError, TransportResponse};

/// Current version of the btcpay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
