//! Create a payment request and fetch it back
//!
//! Reads `BTCPAY_URL`, `BTCPAY_STORE_ID` and `BTCPAY_API_KEY` from the
//! environment.

use btcpay::{BtcPayError, ClientConfig, PaymentRequestRequest, Store};
use rust_decimal::Decimal;
use std::time::Duration;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env()?.with_timeout(Duration::from_secs(30));
    println!("Using store {} at {}", config.store_id, config.url);

    let store = Store::from_config(config)?;

    let request = PaymentRequestRequest::new(Decimal::new(1999, 2), "USD", "Demo invoice")
        .with_description("<p>Created by the btcpay demo</p>")
        .with_expiry_days(7);

    let created = match store.create_payment_request(&request).await {
        Ok(created) => created,
        Err(BtcPayError::Unauthenticated) => {
            eprintln!("The API key was rejected; check BTCPAY_API_KEY");
            return Ok(());
        }
        Err(BtcPayError::Forbidden) => {
            eprintln!("The API key lacks the payment request permission");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!(
        "Created payment request {} ({} {}), status {}",
        created.id, created.amount, created.currency, created.status
    );

    let fetched = store.get_payment_request(&created.id).await?;
    println!("Fetched {}: {} expires {:?}", fetched.id, fetched.title, fetched.expiry_date);

    Ok(())
}
