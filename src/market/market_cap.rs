//! Market capitalization lookups
//!
//! The planner treats market data as an external provider that returns a
//! capitalization per symbol or nothing. `SnapshotMarketData` serves figures
//! from a CSV snapshot; other providers plug in through `MarketDataSource`.

use crate::error::{PlannerError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUNDLED_MARKET_CAPS: &str = include_str!("../../data/market_caps.csv");

/// Provider of capitalization figures
pub trait MarketDataSource: Send + Sync {
    /// Market cap for `symbol`, `Ok(None)` when the provider has no data
    fn market_cap(&self, symbol: &str) -> Result<Option<f64>>;
}

/// Lookup result for one requested symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapQuote {
    pub symbol: String,
    pub market_cap: Option<f64>,
}

// Other snapshot columns (name, currency) are informational
#[derive(Debug, Deserialize)]
struct SnapshotRow {
    symbol: String,
    market_cap: Option<f64>,
}

/// Market caps from a static snapshot, keyed by upper-cased symbol
#[derive(Debug, Clone, Default)]
pub struct SnapshotMarketData {
    caps: HashMap<String, f64>,
}

impl SnapshotMarketData {
    pub fn new(caps: HashMap<String, f64>) -> Self {
        let caps = caps
            .into_iter()
            .map(|(symbol, cap)| (normalize_symbol(&symbol), cap))
            .collect();
        Self { caps }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut caps = HashMap::new();
        for row in rdr.deserialize() {
            let row: SnapshotRow = row?;
            match row.market_cap {
                Some(cap) if cap.is_finite() => {
                    caps.insert(normalize_symbol(&row.symbol), cap);
                }
                _ => warn!("Skipping {}: no market cap in snapshot", row.symbol),
            }
        }
        Ok(Self { caps })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PlannerError::io(path, e))?;
        let source = Self::from_reader(file)?;
        info!("Loaded {} market caps from {}", source.len(), path.display());
        Ok(source)
    }

    /// Snapshot bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_MARKET_CAPS.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}

impl MarketDataSource for SnapshotMarketData {
    fn market_cap(&self, symbol: &str) -> Result<Option<f64>> {
        Ok(self.caps.get(&normalize_symbol(symbol)).copied())
    }
}

fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// Split a comma-separated symbol list, dropping blanks and duplicates.
/// Order of first appearance is kept.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(normalize_symbol)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Look up every symbol against `source`
pub fn lookup_market_caps(source: &dyn MarketDataSource, symbols: &[String]) -> Result<Vec<MarketCapQuote>> {
    symbols
        .iter()
        .map(|symbol| -> Result<MarketCapQuote> {
            let market_cap = source.market_cap(symbol)?;
            Ok(MarketCapQuote { symbol: symbol.clone(), market_cap })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Unreachable;

    impl MarketDataSource for Unreachable {
        fn market_cap(&self, _symbol: &str) -> Result<Option<f64>> {
            Err(PlannerError::MarketData("provider offline".into()))
        }
    }

    #[test]
    fn test_snapshot_lookup_case_insensitive() {
        let source = SnapshotMarketData::bundled().expect("Failed to load bundled snapshot");
        assert_eq!(source.len(), 12);

        let cap = source.market_cap(" tcs.ns ").unwrap().unwrap();
        assert_relative_eq!(cap, 15_020_000_000_000.0);
        assert_eq!(source.market_cap("UNKNOWN").unwrap(), None);
    }

    #[test]
    fn test_rows_without_cap_skipped() {
        let csv = "symbol,name,market_cap,currency\nAAA,A Corp,100,USD\nBBB,B Corp,,USD\n";
        let source = SnapshotMarketData::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.market_cap("bbb").unwrap(), None);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_symbols("aapl, MSFT,,aapl , tcs.ns"), vec!["AAPL", "MSFT", "TCS.NS"]);
        assert!(parse_symbols(" , ").is_empty());
    }

    #[test]
    fn test_lookup_reports_missing_as_none() {
        let source = SnapshotMarketData::new(HashMap::from([("aapl".to_string(), 3.0e12)]));
        let quotes = lookup_market_caps(&source, &parse_symbols("AAPL,ZZZZ")).unwrap();
        assert_eq!(
            quotes,
            vec![
                MarketCapQuote { symbol: "AAPL".into(), market_cap: Some(3.0e12) },
                MarketCapQuote { symbol: "ZZZZ".into(), market_cap: None },
            ]
        );
    }

    #[test]
    fn test_provider_failure_propagates() {
        let result = lookup_market_caps(&Unreachable, &["AAPL".to_string()]);
        assert!(matches!(result, Err(PlannerError::MarketData(_))));
    }
}
