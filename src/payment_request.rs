//! Payment request resource types

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentRequestStatus {
    Pending,
    Completed,
    Expired,
}

impl PaymentRequestStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRequestStatus::Pending => "Pending",
            PaymentRequestStatus::Completed => "Completed",
            PaymentRequestStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for PaymentRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentRequestStatus {
    type Err = crate::BtcPayError;

    fn from_str(s: &str) -> crate::Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(crate::BtcPayError::Decode)
    }
}

/// Outbound shape of a payment request.
///
/// `amount`, `currency` and `title` are mandatory for the server; they are
/// not checked here; a missing or invalid value comes back as
/// [`BtcPayError::BadRequest`](crate::BtcPayError::BadRequest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequestRequest {
    /// Requested amount
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 currency code (BTC, EUR, USD, ...)
    pub currency: String,
    /// Title shown on the payment request page
    pub title: String,
    /// Whether the payer may pay a different amount
    #[serde(
        rename = "allowCustomPaymentAmounts",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_custom_payment_amounts: Option<bool>,
    /// URI of a custom stylesheet
    #[serde(rename = "customCSSLink", skip_serializing_if = "Option::is_none")]
    pub custom_css_link: Option<String>,
    /// HTML description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Inline CSS, at most 500 bytes
    #[serde(rename = "embeddedCSS", skip_serializing_if = "Option::is_none")]
    pub embedded_css: Option<String>,
    /// RFC3339 expiry date
    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl PaymentRequestRequest {
    /// Create a request with the mandatory fields set
    pub fn new(amount: Decimal, currency: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            title: title.into(),
            allow_custom_payment_amounts: None,
            custom_css_link: None,
            description: None,
            email: None,
            embedded_css: None,
            expiry_date: None,
        }
    }

    /// Allow or forbid custom payment amounts
    pub fn with_custom_amounts(mut self, allow: bool) -> Self {
        self.allow_custom_payment_amounts = Some(allow);
        self
    }

    /// Set the custom stylesheet link
    pub fn with_custom_css_link(mut self, link: impl Into<String>) -> Self {
        self.custom_css_link = Some(link.into());
        self
    }

    /// Set the HTML description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the embedded stylesheet
    pub fn with_embedded_css(mut self, css: impl Into<String>) -> Self {
        self.embedded_css = Some(css.into());
        self
    }

    /// Set the expiry to `days` days from now
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.set_expiry_days(days);
        self
    }

    /// Set the expiry date to now plus `days` days.
    ///
    /// Negative values produce a timestamp in the past; the server decides
    /// whether to accept it.
    pub fn set_expiry_days(&mut self, days: i64) {
        let now = Utc::now();
        let expiry = TimeDelta::try_days(days)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(if days < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        self.set_expiry(expiry);
    }

    /// Set the expiry date to a fixed instant
    pub fn set_expiry(&mut self, at: DateTime<Utc>) {
        self.expiry_date = Some(at.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
}

/// A payment request as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(flatten)]
    pub request: PaymentRequestRequest,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created: String,
    pub id: String,
    pub status: PaymentRequestStatus,
}

impl PaymentRequest {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, PaymentRequestStatus::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, PaymentRequestStatus::Completed)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.status, PaymentRequestStatus::Expired)
    }
}

impl std::ops::Deref for PaymentRequest {
    type Target = PaymentRequestRequest;

    fn deref(&self) -> &Self::Target {
        &self.request
    }
}
