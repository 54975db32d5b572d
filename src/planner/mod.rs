//! Goal-feasibility engine: required monthly contribution and affordability

mod data;
mod engine;
mod advice;
mod batch;

pub use data::{GoalInput, FinancesInput, PlanResult};
pub use engine::{compute_required_contribution, evaluate_goal, round_to_cents};
pub use advice::{advice_for, FEASIBLE_ADVICE};
pub use batch::evaluate_batch;

// ============================================================================
// Request Defaults
// ============================================================================
// Applied at the request boundary when the optional fields are omitted.

/// Default number of monthly contributions remaining
pub const DEFAULT_MONTHS_LEFT: i64 = 12;

/// Default expected annual return, in percent (12 = 12%)
pub const DEFAULT_ANNUAL_ROI: f64 = 12.0;
