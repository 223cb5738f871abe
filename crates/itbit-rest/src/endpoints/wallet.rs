//! Wallet endpoints
//!
//! These endpoints require authentication.

use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::ItBitClient;
use crate::error::RestResult;
use crate::types::{TradeHistory, Wallet};

/// Wallet and trade-history endpoints
pub struct WalletEndpoints<'a> {
    client: &'a ItBitClient,
}

impl<'a> WalletEndpoints<'a> {
    pub(crate) fn new(client: &'a ItBitClient) -> Self {
        Self { client }
    }

    /// List all wallets belonging to a user
    #[instrument(skip(self))]
    pub async fn get_wallets(&self, user_id: &str) -> RestResult<Vec<Wallet>> {
        debug!("Listing wallets for user {}", user_id);
        self.client
            .private_request(Method::GET, "/wallets", &[("userId", user_id)], None)
            .await
    }

    /// Get one wallet with its balances
    #[instrument(skip(self))]
    pub async fn get_wallet(&self, wallet_id: &str) -> RestResult<Wallet> {
        debug!("Fetching wallet {}", wallet_id);
        self.client
            .private_request(Method::GET, &format!("/wallets/{wallet_id}"), &[], None)
            .await
    }

    /// Get trade history for a wallet
    #[instrument(skip(self))]
    pub async fn get_trades(&self, wallet_id: &str) -> RestResult<TradeHistory> {
        debug!("Fetching trades for wallet {}", wallet_id);
        self.client
            .private_request(Method::GET, &format!("/wallets/{wallet_id}/trades"), &[], None)
            .await
    }
}
