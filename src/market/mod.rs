//! Read-only market data feeds: fund performance and market capitalization

pub mod funds;
pub mod market_cap;

pub use funds::{FundRecord, FundTable, ReturnHorizon, load_funds, load_funds_from_reader, load_default_funds};
pub use market_cap::{
    MarketDataSource, SnapshotMarketData, MarketCapQuote, lookup_market_caps, parse_symbols,
};
