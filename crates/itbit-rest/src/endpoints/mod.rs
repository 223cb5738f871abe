//! API endpoint implementations

pub mod funding;
pub mod market;
pub mod trading;
pub mod wallet;

pub use funding::FundingEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;
pub use wallet::WalletEndpoints;
