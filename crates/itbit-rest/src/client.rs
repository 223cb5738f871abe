//! Main REST client implementation

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use itbit_auth::{Credentials, RequestSigner, HEADER_NONCE, HEADER_TIMESTAMP};

use crate::endpoints::{FundingEndpoints, MarketEndpoints, TradingEndpoints, WalletEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{append_query, ApiVersion};
use crate::response;
use crate::types::{Deposit, NewOrder, Order, OrderBook, Ticker, TradeHistory, Wallet, Withdrawal};

/// Default v1 base URL (public v1 and all private endpoints)
const DEFAULT_SERVER_V1: &str = "https://api.itbit.com/v1";

/// Default v2 base URL
const DEFAULT_SERVER_V2: &str = "https://www.itbit.com/api/v2";

/// Default request timeout in milliseconds
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("itbit-rest/", env!("CARGO_PKG_VERSION"));

/// Content type the API expects on every request, including JSON bodies
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// itBit REST API client
///
/// Provides access to both public and private endpoints. The client owns a
/// monotonic nonce counter seeded at construction; clones share it, so
/// nonces stay unique across cloned handles.
///
/// # Example
///
/// ```no_run
/// use itbit_rest::ItBitClient;
/// use itbit_auth::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = ItBitClient::new()?;
///     let ticker = client.get_ticker("XBTUSD").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = ItBitClient::with_credentials(creds)?;
///     let wallets = auth_client.get_wallets("my-user-id").await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ItBitClient {
    http: Client,
    server_v1: String,
    server_v2: String,
    signer: Option<Arc<RequestSigner>>,
}

impl ItBitClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|e| RestError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let signer = config
            .credentials
            .map(RequestSigner::new)
            .transpose()?
            .map(Arc::new);

        info!("Created itBit REST client");

        Ok(Self {
            http,
            server_v1: config.server_v1.trim_end_matches('/').to_string(),
            server_v2: config.server_v2.trim_end_matches('/').to_string(),
            signer,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    // ========================================================================
    // Request cores
    // ========================================================================

    /// Issue a public GET against the versioned base URL
    pub(crate) async fn public_request<T: DeserializeOwned>(
        &self,
        version: ApiVersion,
        path: &str,
        query: &[(&str, &str)],
    ) -> RestResult<T> {
        let base = match version {
            ApiVersion::V1 => &self.server_v1,
            ApiVersion::V2 => &self.server_v2,
        };
        let mut uri = format!("{base}{path}");
        append_query(&mut uri, query)?;

        debug!(%uri, "public request");

        let outcome = self
            .http
            .get(&uri)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await;

        response::interpret(Method::GET, uri, outcome).await
    }

    /// Issue a signed request against the private (v1) base URL
    ///
    /// The credentials check runs before anything else so a credential-less
    /// call leaves the nonce counter untouched.
    pub(crate) async fn private_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> RestResult<T> {
        let signer = self.signer.as_deref().ok_or(RestError::AuthRequired)?;

        let mut uri = format!("{}{}", self.server_v1, path);
        append_query(&mut uri, query)?;
        let post_data = body.unwrap_or_default();

        let auth = signer.sign_request(method.as_str(), &uri, &post_data)?;

        debug!(%method, %uri, "private request");

        let mut request = self
            .http
            .request(method.clone(), &uri)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(AUTHORIZATION, auth.authorization)
            .header(HEADER_TIMESTAMP, auth.timestamp)
            .header(HEADER_NONCE, auth.nonce);
        if !post_data.is_empty() {
            request = request.body(post_data);
        }

        response::interpret(method, uri, request.send().await).await
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Public market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Wallet endpoints (require credentials)
    pub fn wallets(&self) -> WalletEndpoints<'_> {
        WalletEndpoints::new(self)
    }

    /// Order management endpoints (require credentials)
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Deposit/withdrawal endpoints (require credentials)
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(self)
    }

    // ========================================================================
    // Convenience passthroughs
    // ========================================================================

    /// Get the ticker for a market
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Ticker> {
        self.market().get_ticker(symbol).await
    }

    /// Get the order book for a market
    pub async fn get_order_book(&self, symbol: &str) -> RestResult<OrderBook> {
        self.market().get_order_book(symbol).await
    }

    /// List wallets for a user
    pub async fn get_wallets(&self, user_id: &str) -> RestResult<Vec<Wallet>> {
        self.wallets().get_wallets(user_id).await
    }

    /// Get one wallet
    pub async fn get_wallet(&self, wallet_id: &str) -> RestResult<Wallet> {
        self.wallets().get_wallet(wallet_id).await
    }

    /// Get trade history for a wallet
    pub async fn get_trades(&self, wallet_id: &str) -> RestResult<TradeHistory> {
        self.wallets().get_trades(wallet_id).await
    }

    /// List orders in a wallet, optionally filtered
    pub async fn get_orders(
        &self,
        wallet_id: &str,
        instrument: Option<&str>,
        status: Option<&str>,
    ) -> RestResult<Vec<Order>> {
        self.trading().get_orders(wallet_id, instrument, status).await
    }

    /// Get one order
    pub async fn get_order(&self, wallet_id: &str, order_id: &str) -> RestResult<Order> {
        self.trading().get_order(wallet_id, order_id).await
    }

    /// Place a new order
    pub async fn add_order(&self, wallet_id: &str, order: &NewOrder) -> RestResult<Order> {
        self.trading().add_order(wallet_id, order).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, wallet_id: &str, order_id: &str) -> RestResult<()> {
        self.trading().cancel_order(wallet_id, order_id).await
    }

    /// Withdraw cryptocurrency to an address
    pub async fn withdraw_cryptocurrency(
        &self,
        wallet_id: &str,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<Withdrawal> {
        self.funding()
            .withdraw_cryptocurrency(wallet_id, currency, amount, address)
            .await
    }

    /// Create a cryptocurrency deposit address
    pub async fn create_cryptocurrency_deposit(
        &self,
        wallet_id: &str,
        currency: &str,
    ) -> RestResult<Deposit> {
        self.funding()
            .create_cryptocurrency_deposit(wallet_id, currency)
            .await
    }
}

impl std::fmt::Debug for ItBitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItBitClient")
            .field("server_v1", &self.server_v1)
            .field("server_v2", &self.server_v2)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional; required for private endpoints)
    pub credentials: Option<Credentials>,
    /// v1 base URL (public v1 and all private endpoints)
    pub server_v1: String,
    /// v2 base URL
    pub server_v2: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            server_v1: DEFAULT_SERVER_V1.to_string(),
            server_v2: DEFAULT_SERVER_V2.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the v1 base URL
    pub fn with_server_v1(mut self, url: impl Into<String>) -> Self {
        self.server_v1 = url.into();
        self
    }

    /// Override the v2 base URL
    pub fn with_server_v2(mut self, url: impl Into<String>) -> Self {
        self.server_v2 = url.into();
        self
    }

    /// Set the request timeout in milliseconds
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
