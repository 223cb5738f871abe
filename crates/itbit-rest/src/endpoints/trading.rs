//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::ItBitClient;
use crate::error::RestResult;
use crate::request::encode_body;
use crate::types::{NewOrder, Order};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a ItBitClient,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(client: &'a ItBitClient) -> Self {
        Self { client }
    }

    /// List orders in a wallet
    ///
    /// # Arguments
    /// * `wallet_id` - Wallet to list orders for
    /// * `instrument` - Filter by instrument (optional)
    /// * `status` - Filter by status, e.g. "open" or "filled" (optional)
    #[instrument(skip(self))]
    pub async fn get_orders(
        &self,
        wallet_id: &str,
        instrument: Option<&str>,
        status: Option<&str>,
    ) -> RestResult<Vec<Order>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(instrument) = instrument {
            query.push(("instrument", instrument));
        }
        if let Some(status) = status {
            query.push(("status", status));
        }

        debug!("Listing orders for wallet {}", wallet_id);
        self.client
            .private_request(
                Method::GET,
                &format!("/wallets/{wallet_id}/orders"),
                &query,
                None,
            )
            .await
    }

    /// Get one order
    #[instrument(skip(self))]
    pub async fn get_order(&self, wallet_id: &str, order_id: &str) -> RestResult<Order> {
        debug!("Fetching order {}", order_id);
        self.client
            .private_request(
                Method::GET,
                &format!("/wallets/{wallet_id}/orders/{order_id}"),
                &[],
                None,
            )
            .await
    }

    /// Place a new order
    ///
    /// The body is serialized once; the same bytes are signed and sent, and
    /// unset optional fields are absent from it entirely.
    #[instrument(skip(self, order), fields(instrument = %order.instrument, side = %order.side))]
    pub async fn add_order(&self, wallet_id: &str, order: &NewOrder) -> RestResult<Order> {
        let body = encode_body(order)?;

        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.amount, order.instrument
        );
        self.client
            .private_request(
                Method::POST,
                &format!("/wallets/{wallet_id}/orders"),
                &[],
                Some(body),
            )
            .await
    }

    /// Cancel an order
    ///
    /// The API answers `202 Accepted` with an empty body; cancellation
    /// completes asynchronously on the server.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, wallet_id: &str, order_id: &str) -> RestResult<()> {
        debug!("Cancelling order {}", order_id);
        self.client
            .private_request(
                Method::DELETE,
                &format!("/wallets/{wallet_id}/orders/{order_id}"),
                &[],
                None,
            )
            .await
    }
}
