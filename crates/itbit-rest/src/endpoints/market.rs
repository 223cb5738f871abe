//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use tracing::{debug, instrument};

use crate::client::ItBitClient;
use crate::error::RestResult;
use crate::request::ApiVersion;
use crate::types::{OrderBook, Ticker};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a ItBitClient,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(client: &'a ItBitClient) -> Self {
        Self { client }
    }

    /// Get ticker information for a market
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (e.g. "XBTUSD", "XBTEUR")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Ticker> {
        debug!("Fetching ticker for {}", symbol);
        self.client
            .public_request(ApiVersion::V1, &format!("/markets/{symbol}/ticker"), &[])
            .await
    }

    /// Get the full order book for a market
    ///
    /// # Arguments
    /// * `symbol` - Market symbol (e.g. "XBTUSD")
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, symbol: &str) -> RestResult<OrderBook> {
        debug!("Fetching order book for {}", symbol);
        self.client
            .public_request(ApiVersion::V2, &format!("/markets/{symbol}/orders"), &[])
            .await
    }
}
