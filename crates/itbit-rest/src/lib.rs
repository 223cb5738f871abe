//! REST API client for the itBit cryptocurrency exchange
//!
//! This crate provides a complete REST API client for trading on itBit,
//! including market data, wallet management, order execution, and
//! cryptocurrency funding.
//!
//! # Features
//!
//! - **Market Data**: Ticker and order book (no authentication required)
//! - **Wallets**: List wallets, balances, trade history
//! - **Trading**: Place, list, and cancel orders
//! - **Funding**: Cryptocurrency deposit addresses and withdrawals
//!
//! # Authentication
//!
//! Private endpoints are signed per request: a monotonic nonce plus an
//! HMAC-SHA512 signature over a SHA-256 digest of the canonical message, as
//! specified by itBit's API documentation. See the `itbit-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use itbit_rest::{ItBitClient, NewOrder, Side};
//! use itbit_auth::Credentials;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = ItBitClient::new()?;
//!     let ticker = client.get_ticker("XBTUSD").await?;
//!     println!("XBT/USD bid: {} ask: {}", ticker.bid, ticker.ask);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let client = ItBitClient::with_credentials(creds)?;
//!     let order = NewOrder::limit("XBTUSD", Side::Buy, dec!(0.01), dec!(600.25));
//!     let placed = client.add_order("wallet-id", &order).await?;
//!     println!("Placed order {}", placed.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure surfaces as a [`RestError`] carrying the attempted method
//! and URI: configuration and credential problems are caught before any
//! request is issued, transport failures wrap the underlying cause, and
//! server rejections carry the API's error code and description.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, ItBitClient};
pub use error::{RestError, RestResult};
pub use itbit_auth::Credentials;
pub use request::ApiVersion;

// Re-export endpoint-specific types
pub use types::{
    // Market data
    OrderBook, Ticker,
    // Wallets
    Balance, Wallet,
    // Trading
    NewOrder, Order, OrderType, Side, Trade, TradeHistory,
    // Funding
    Deposit, Withdrawal,
};
