//! Funding endpoints for cryptocurrency deposits and withdrawals
//!
//! These endpoints require authentication.

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::ItBitClient;
use crate::error::RestResult;
use crate::request::encode_body;
use crate::types::{Deposit, Withdrawal};

/// Funding endpoints for deposits and withdrawals
pub struct FundingEndpoints<'a> {
    client: &'a ItBitClient,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(client: &'a ItBitClient) -> Self {
        Self { client }
    }

    /// Withdraw cryptocurrency to an external address
    ///
    /// # Arguments
    /// * `wallet_id` - Source wallet
    /// * `currency` - Currency code (e.g. "XBT")
    /// * `amount` - Amount to withdraw
    /// * `address` - Destination address
    #[instrument(skip(self))]
    pub async fn withdraw_cryptocurrency(
        &self,
        wallet_id: &str,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<Withdrawal> {
        let body = encode_body(&WithdrawalRequest {
            currency,
            amount,
            address,
        })?;

        debug!("Withdrawing {} {} from wallet {}", amount, currency, wallet_id);
        self.client
            .private_request(
                Method::POST,
                &format!("/wallets/{wallet_id}/cryptocurrency_withdrawals"),
                &[],
                Some(body),
            )
            .await
    }

    /// Create a new deposit address for a currency
    ///
    /// # Arguments
    /// * `wallet_id` - Target wallet
    /// * `currency` - Currency code (e.g. "XBT")
    #[instrument(skip(self))]
    pub async fn create_cryptocurrency_deposit(
        &self,
        wallet_id: &str,
        currency: &str,
    ) -> RestResult<Deposit> {
        let body = encode_body(&DepositRequest { currency })?;

        debug!("Creating {} deposit address for wallet {}", currency, wallet_id);
        self.client
            .private_request(
                Method::POST,
                &format!("/wallets/{wallet_id}/cryptocurrency_deposits"),
                &[],
                Some(body),
            )
            .await
    }
}

// Request bodies specific to funding endpoints

#[derive(Debug, Serialize)]
struct WithdrawalRequest<'a> {
    currency: &'a str,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    address: &'a str,
}

#[derive(Debug, Serialize)]
struct DepositRequest<'a> {
    currency: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_request_amount_is_decimal_string() {
        let body = encode_body(&WithdrawalRequest {
            currency: "XBT",
            amount: dec!(0.50),
            address: "1CEwUWWtXQseAAR4gYrANWZk6d3hMyoeAY",
        })
        .unwrap();

        assert_eq!(
            body,
            r#"{"currency":"XBT","amount":"0.50","address":"1CEwUWWtXQseAAR4gYrANWZk6d3hMyoeAY"}"#
        );
    }
}
