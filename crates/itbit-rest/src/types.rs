//! Types for itBit REST API requests and responses
//!
//! All price and amount fields travel as decimal strings on the wire and
//! are mapped through `rust_decimal` to avoid floating-point drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Enums
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type (itBit supports limit orders only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker for a market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Market symbol (e.g. "XBTUSD")
    pub pair: String,
    /// Best bid price
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    /// Amount available at the best bid
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_amt: Decimal,
    /// Best ask price
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    /// Amount available at the best ask
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_amt: Decimal,
    /// Price of the last trade
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    /// Quantity of the last trade
    #[serde(with = "rust_decimal::serde::str")]
    pub last_qty: Decimal,
    /// Volume over the trailing 24 hours
    #[serde(rename = "volume24h", with = "rust_decimal::serde::str")]
    pub volume_24h: Decimal,
    /// Volume since midnight UTC
    #[serde(with = "rust_decimal::serde::str")]
    pub volume_today: Decimal,
    /// High over the trailing 24 hours
    #[serde(rename = "high24h", with = "rust_decimal::serde::str")]
    pub high_24h: Decimal,
    /// Low over the trailing 24 hours
    #[serde(rename = "low24h", with = "rust_decimal::serde::str")]
    pub low_24h: Decimal,
    /// High since midnight UTC
    #[serde(with = "rust_decimal::serde::str")]
    pub high_today: Decimal,
    /// Low since midnight UTC
    #[serde(with = "rust_decimal::serde::str")]
    pub low_today: Decimal,
    /// Opening price at midnight UTC
    #[serde(with = "rust_decimal::serde::str")]
    pub open_today: Decimal,
    /// Volume-weighted average price since midnight UTC
    #[serde(with = "rust_decimal::serde::str")]
    pub vwap_today: Decimal,
    /// Volume-weighted average price over the trailing 24 hours
    #[serde(rename = "vwap24h", with = "rust_decimal::serde::str")]
    pub vwap_24h: Decimal,
    /// Server timestamp for the snapshot
    #[serde(rename = "serverTimeUTC")]
    pub server_time_utc: String,
}

/// Order book snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Ask levels [price, amount]
    pub asks: Vec<Vec<String>>,
    /// Bid levels [price, amount]
    pub bids: Vec<Vec<String>>,
}

impl OrderBook {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level.first()?.parse().ok())
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level.first()?.parse().ok())
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

// ============================================================================
// Wallet Types
// ============================================================================

/// Account wallet
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Wallet identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Wallet display name
    pub name: String,
    /// Per-currency balances
    #[serde(default)]
    pub balances: Vec<Balance>,
}

/// Balance of one currency within a wallet
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Currency code (e.g. "XBT", "USD")
    pub currency: String,
    /// Balance available for trading or withdrawal
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    /// Total balance including holds
    #[serde(with = "rust_decimal::serde::str")]
    pub total_balance: Decimal,
}

// ============================================================================
// Order Types
// ============================================================================

/// An order as reported by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub id: String,
    /// Wallet the order belongs to
    pub wallet_id: String,
    /// Buy or sell
    pub side: Side,
    /// Traded instrument (e.g. "XBTUSD")
    pub instrument: String,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Currency of the order amount
    pub currency: String,
    /// Ordered amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Limit price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Amount filled so far
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_filled: Decimal,
    /// Volume-weighted average fill price
    #[serde(with = "rust_decimal::serde::str")]
    pub volume_weighted_average_price: Decimal,
    /// Creation timestamp
    pub created_time: String,
    /// Order status (submitted, open, filled, cancelled, rejected)
    pub status: String,
    /// Caller-supplied metadata echoed back by the API
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Caller-supplied order identifier echoed back by the API
    #[serde(default)]
    pub client_order_identifier: Option<String>,
}

/// A new order to place
///
/// Optional fields are serialized only when set; the server treats key
/// presence as significant, so unset fields never appear in the body.
///
/// # Example
///
/// ```
/// use itbit_rest::{NewOrder, Side};
/// use rust_decimal_macros::dec;
///
/// let order = NewOrder::limit("XBTUSD", Side::Buy, dec!(1.5), dec!(600.25))
///     .with_client_order_identifier("order-7");
/// assert_eq!(order.currency, "XBT");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Buy or sell
    pub side: Side,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Currency of the amount, derived from the instrument
    pub currency: String,
    /// Amount to trade, serialized as a decimal string
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Limit price, serialized as a decimal string
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Instrument to trade (e.g. "XBTUSD")
    pub instrument: String,
    /// Optional free-form metadata stored with the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Optional caller-assigned order identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_identifier: Option<String>,
}

impl NewOrder {
    /// Create a limit order
    ///
    /// The amount currency is the first three characters of `instrument`
    /// (e.g. "XBT" for "XBTUSD").
    pub fn limit(
        instrument: impl Into<String>,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        let instrument = instrument.into();
        let currency = instrument.chars().take(3).collect();

        Self {
            side,
            order_type: OrderType::Limit,
            currency,
            amount,
            price,
            instrument,
            metadata: None,
            client_order_identifier: None,
        }
    }

    /// Attach metadata to the order
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach a caller-assigned order identifier
    pub fn with_client_order_identifier(mut self, id: impl Into<String>) -> Self {
        self.client_order_identifier = Some(id.into());
        self
    }
}

// ============================================================================
// Trade Types
// ============================================================================

/// One page of trade history for a wallet
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistory {
    /// Total records across all pages
    pub total_number_of_records: u64,
    /// Current page number
    pub current_page_number: u64,
    /// Records per page
    pub records_per_page: u64,
    /// Most recent execution id, for pagination
    #[serde(default)]
    pub latest_execution_id: Option<String>,
    /// Trades on this page
    pub trading_history: Vec<Trade>,
}

/// A single executed trade
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Order the execution belongs to
    pub order_id: String,
    /// Execution timestamp
    pub timestamp: String,
    /// Traded instrument
    pub instrument: String,
    /// Taker direction
    pub direction: Side,
    /// Execution price
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    /// Amount in the instrument's base currency
    #[serde(rename = "currency1Amount", with = "rust_decimal::serde::str")]
    pub currency1_amount: Decimal,
    /// Amount in the instrument's quote currency
    #[serde(rename = "currency2Amount", with = "rust_decimal::serde::str")]
    pub currency2_amount: Decimal,
}

// ============================================================================
// Funding Types
// ============================================================================

/// A submitted cryptocurrency withdrawal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Withdrawal identifier
    pub id: u64,
    /// Source wallet
    pub wallet_id: String,
    /// Withdrawn currency
    pub currency: String,
    /// Withdrawn amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Processing status, when reported
    #[serde(default)]
    pub status: Option<String>,
}

/// A newly created cryptocurrency deposit address
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// Deposit identifier
    pub id: u64,
    /// Target wallet
    pub wallet_id: String,
    /// Deposit currency
    pub currency: String,
    /// Address to send funds to
    pub deposit_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_derives_currency_from_instrument() {
        let order = NewOrder::limit("XBTUSD", Side::Buy, dec!(1), dec!(600));
        assert_eq!(order.currency, "XBT");

        let order = NewOrder::limit("ETHEUR", Side::Sell, dec!(2), dec!(3000));
        assert_eq!(order.currency, "ETH");
    }

    #[test]
    fn test_new_order_omits_unset_optional_fields() {
        let order = NewOrder::limit("XBTUSD", Side::Buy, dec!(1.5), dec!(600.25));
        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();

        let object = body.as_object().unwrap();
        assert!(!object.contains_key("metadata"));
        assert!(!object.contains_key("clientOrderIdentifier"));
        assert_eq!(body["side"], "buy");
        assert_eq!(body["type"], "limit");
        assert_eq!(body["amount"], "1.5");
        assert_eq!(body["price"], "600.25");
    }

    #[test]
    fn test_new_order_serializes_optional_fields_when_set() {
        let order = NewOrder::limit("XBTUSD", Side::Sell, dec!(1), dec!(650))
            .with_metadata(serde_json::json!({"note": "hedge"}))
            .with_client_order_identifier("order-7");
        let body: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();

        assert_eq!(body["metadata"]["note"], "hedge");
        assert_eq!(body["clientOrderIdentifier"], "order-7");
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let order = NewOrder::limit("XBTUSD", Side::Buy, dec!(0.10), dec!(600.00));
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains(r#""amount":"0.10""#));
        assert!(json.contains(r#""price":"600.00""#));
    }

    #[test]
    fn test_order_book_helpers() {
        let book = OrderBook {
            asks: vec![
                vec!["641.29".to_string(), "0.5".to_string()],
                vec!["641.31".to_string(), "1.2".to_string()],
            ],
            bids: vec![
                vec!["622.00".to_string(), "0.0006".to_string()],
                vec!["621.13".to_string(), "0.5".to_string()],
            ],
        };

        assert_eq!(book.best_ask(), Some(dec!(641.29)));
        assert_eq!(book.best_bid(), Some(dec!(622.00)));
        assert_eq!(book.spread(), Some(dec!(19.29)));
    }

    #[test]
    fn test_empty_order_book_has_no_spread() {
        let book = OrderBook { asks: vec![], bids: vec![] };
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.spread(), None);
    }

    #[test]
    fn test_wallet_deserializes_camel_case() {
        let wallet: Wallet = serde_json::from_str(
            r#"{
                "id": "w1",
                "userId": "user-1",
                "name": "primary",
                "balances": [
                    {"currency": "USD", "availableBalance": "50000.00", "totalBalance": "50250.00"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(wallet.user_id, "user-1");
        assert_eq!(wallet.balances[0].available_balance, dec!(50000.00));
    }

    #[test]
    fn test_side_display_matches_wire_form() {
        assert_eq!(Side::Buy.to_string(), "buy");
        assert_eq!(Side::Sell.to_string(), "sell");
        assert_eq!(OrderType::Limit.to_string(), "limit");
    }
}
