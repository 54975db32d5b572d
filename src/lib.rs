//! Savings goal planner
//!
//! Computes the monthly contribution needed to reach a savings goal,
//! whether the household can afford it, and guidance on closing any gap.
//! Also serves read-only fund performance and market capitalization data.
//!
//! - `planner`: the feasibility engine (pure, stateless)
//! - `request`: boundary validation into typed engine inputs
//! - `market`: fund table and market cap sources
//! - `api`: axum router and handlers for the HTTP API

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod planner;
pub mod request;

pub use config::ServiceConfig;
pub use error::{PlannerError, ValidationError};
pub use planner::{compute_required_contribution, evaluate_goal, FinancesInput, GoalInput, PlanResult};
pub use request::GoalRequest;
