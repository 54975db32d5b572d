//! Service configuration
//!
//! Read from an optional JSON file (`PLANNER_CONFIG`) and then overridden by
//! individual environment variables. Every field has a default so an empty
//! environment yields a working service on the bundled data snapshots.

use crate::error::{PlannerError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const ENV_CONFIG_FILE: &str = "PLANNER_CONFIG";
pub const ENV_FUND_DATA: &str = "PLANNER_FUND_DATA";
pub const ENV_MARKET_DATA: &str = "PLANNER_MARKET_DATA";
pub const ENV_TOP_FUNDS_LIMIT: &str = "PLANNER_TOP_FUNDS_LIMIT";
pub const ENV_MAX_FUNDS_LIMIT: &str = "PLANNER_MAX_FUNDS_LIMIT";
pub const ENV_MAX_BATCH_GOALS: &str = "PLANNER_MAX_BATCH_GOALS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Fund performance CSV. Bundled snapshot when unset.
    #[serde(default)]
    pub fund_data_path: Option<PathBuf>,

    /// Market cap CSV. Bundled snapshot when unset.
    #[serde(default)]
    pub market_data_path: Option<PathBuf>,

    /// Funds returned by /funds/top when no limit is given
    #[serde(default = "default_top_funds_limit")]
    pub top_funds_limit: usize,

    /// Largest limit a client may ask for
    #[serde(default = "default_max_funds_limit")]
    pub max_funds_limit: usize,

    /// Most goals accepted in one /plan/batch request
    #[serde(default = "default_max_batch_goals")]
    pub max_batch_goals: usize,
}

fn default_top_funds_limit() -> usize { 5 }
fn default_max_funds_limit() -> usize { 50 }
fn default_max_batch_goals() -> usize { 100 }

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            fund_data_path: None,
            market_data_path: None,
            top_funds_limit: 5,
            max_funds_limit: 50,
            max_batch_goals: 100,
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut config = match non_empty(vars, ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(path) = non_empty(vars, ENV_FUND_DATA) {
            config.fund_data_path = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty(vars, ENV_MARKET_DATA) {
            config.market_data_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = non_empty(vars, ENV_TOP_FUNDS_LIMIT) {
            config.top_funds_limit = parse_limit(ENV_TOP_FUNDS_LIMIT, raw)?;
        }
        if let Some(raw) = non_empty(vars, ENV_MAX_FUNDS_LIMIT) {
            config.max_funds_limit = parse_limit(ENV_MAX_FUNDS_LIMIT, raw)?;
        }
        if let Some(raw) = non_empty(vars, ENV_MAX_BATCH_GOALS) {
            config.max_batch_goals = parse_limit(ENV_MAX_BATCH_GOALS, raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlannerError::io(path, e))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| PlannerError::Config(format!("{path}: {e}")))?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_funds_limit == 0 {
            return Err(PlannerError::Config("max_funds_limit must be at least 1".into()));
        }
        if self.top_funds_limit > self.max_funds_limit {
            return Err(PlannerError::Config(format!(
                "top_funds_limit ({}) exceeds max_funds_limit ({})",
                self.top_funds_limit, self.max_funds_limit
            )));
        }
        Ok(())
    }
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_limit(key: &str, raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|_| PlannerError::Config(format!("{key} must be a non-negative integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.top_funds_limit, 5);
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::from_vars(&vars(&[
            (ENV_FUND_DATA, "/data/funds.csv"),
            (ENV_TOP_FUNDS_LIMIT, "10"),
            (ENV_MARKET_DATA, "  "),
        ]))
        .unwrap();
        assert_eq!(config.fund_data_path, Some(PathBuf::from("/data/funds.csv")));
        assert_eq!(config.market_data_path, None);
        assert_eq!(config.top_funds_limit, 10);
    }

    #[test]
    fn test_bad_limit() {
        let err = ServiceConfig::from_vars(&vars(&[(ENV_TOP_FUNDS_LIMIT, "ten")])).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));

        let err = ServiceConfig::from_vars(&vars(&[(ENV_TOP_FUNDS_LIMIT, "80")])).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServiceConfig = serde_json::from_str(r#"{"max_funds_limit": 20}"#).unwrap();
        assert_eq!(config.max_funds_limit, 20);
        assert_eq!(config.top_funds_limit, 5);
        assert_eq!(config.fund_data_path, None);
    }

    #[test]
    fn test_missing_config_file() {
        let err = ServiceConfig::from_vars(&vars(&[(ENV_CONFIG_FILE, "/nonexistent/planner.json")]))
            .unwrap_err();
        assert!(matches!(err, PlannerError::Io { .. }));
    }
}
