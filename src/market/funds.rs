//! Mutual fund performance table
//!
//! Loaded once from a CSV snapshot (`scheme_name, category, return_1y,
//! return_3y, return_5y`, returns in percent) and queried read-only.

use crate::error::{PlannerError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const BUNDLED_FUNDS: &str = include_str!("../../data/fund_returns.csv");

/// One fund's trailing returns. Missing periods (fund too young) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub scheme_name: String,
    pub category: String,
    pub return_1y: Option<f64>,
    pub return_3y: Option<f64>,
    pub return_5y: Option<f64>,
}

impl FundRecord {
    /// Return for the given horizon, if the fund has one
    pub fn return_for(&self, horizon: ReturnHorizon) -> Option<f64> {
        match horizon {
            ReturnHorizon::OneYear => self.return_1y,
            ReturnHorizon::ThreeYear => self.return_3y,
            ReturnHorizon::FiveYear => self.return_5y,
        }
    }
}

/// Trailing-return period used for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReturnHorizon {
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYear,
    #[serde(rename = "5y")]
    FiveYear,
}

impl FromStr for ReturnHorizon {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1y" | "1" => Ok(ReturnHorizon::OneYear),
            "3y" | "3" => Ok(ReturnHorizon::ThreeYear),
            "5y" | "5" => Ok(ReturnHorizon::FiveYear),
            other => Err(format!("unknown return horizon '{other}', expected 1y, 3y or 5y")),
        }
    }
}

impl fmt::Display for ReturnHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReturnHorizon::OneYear => "1y",
            ReturnHorizon::ThreeYear => "3y",
            ReturnHorizon::FiveYear => "5y",
        };
        f.write_str(label)
    }
}

/// In-memory fund dataset
#[derive(Debug, Clone, Default)]
pub struct FundTable {
    funds: Vec<FundRecord>,
}

impl FundTable {
    pub fn new(funds: Vec<FundRecord>) -> Self {
        Self { funds }
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    pub fn funds(&self) -> &[FundRecord] {
        &self.funds
    }

    /// Best performers for a horizon, highest return first.
    ///
    /// Funds without a figure for the horizon are skipped. Equal returns
    /// are ordered by scheme name. `category` matches case-insensitively.
    pub fn top(&self, horizon: ReturnHorizon, limit: usize, category: Option<&str>) -> Vec<&FundRecord> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        let mut ranked: Vec<(&FundRecord, f64)> = self
            .funds
            .iter()
            .filter(|fund| category.map_or(true, |c| fund.category.eq_ignore_ascii_case(c)))
            .filter_map(|fund| fund.return_for(horizon).map(|r| (fund, r)))
            .collect();

        ranked.sort_by(|(a, ra), (b, rb)| {
            rb.partial_cmp(ra)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.scheme_name.cmp(&b.scheme_name))
        });

        ranked.into_iter().take(limit).map(|(fund, _)| fund).collect()
    }
}

/// Load funds from a CSV file
pub fn load_funds(path: impl AsRef<Path>) -> Result<FundTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PlannerError::io(path, e))?;
    let table = load_funds_from_reader(file)?;
    info!("Loaded {} funds from {}", table.len(), path.display());
    Ok(table)
}

/// Load funds from any CSV reader
pub fn load_funds_from_reader<R: Read>(reader: R) -> Result<FundTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut funds = Vec::new();
    for row in rdr.deserialize() {
        let fund: FundRecord = row?;
        funds.push(fund);
    }
    debug!("Parsed {} fund rows", funds.len());
    Ok(FundTable::new(funds))
}

/// Load the fund snapshot bundled with the crate
pub fn load_default_funds() -> Result<FundTable> {
    load_funds_from_reader(BUNDLED_FUNDS.as_bytes())
}
