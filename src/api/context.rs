//! Immutable per-process state shared by all requests

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::market::{load_default_funds, load_funds, FundTable, MarketDataSource, SnapshotMarketData};
use chrono::{NaiveDate, Utc};
use log::info;

pub struct ServiceContext {
    pub config: ServiceConfig,
    pub funds: FundTable,
    pub market: Box<dyn MarketDataSource>,
    clock: fn() -> NaiveDate,
}

impl ServiceContext {
    pub fn new(config: ServiceConfig, funds: FundTable, market: Box<dyn MarketDataSource>) -> Self {
        Self {
            config,
            funds,
            market,
            clock: utc_today,
        }
    }

    /// Load datasets named by `config`, falling back to the bundled snapshots
    pub fn load(config: ServiceConfig) -> Result<Self> {
        let funds = match &config.fund_data_path {
            Some(path) => load_funds(path)?,
            None => load_default_funds()?,
        };
        let market = match &config.market_data_path {
            Some(path) => SnapshotMarketData::from_path(path)?,
            None => SnapshotMarketData::bundled()?,
        };
        info!("Service ready: {} funds, {} market cap symbols", funds.len(), market.len());
        Ok(Self::new(config, funds, Box::new(market)))
    }

    /// Pin the date used to resolve `target_date` fields
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}
