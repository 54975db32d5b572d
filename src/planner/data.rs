//! Request-scoped value records consumed and produced by the engine

use serde::{Deserialize, Serialize};

/// A single savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    pub goal_name: String,

    /// Amount to accumulate by the end of the horizon
    pub target_amount: f64,

    /// Amount already put aside; may exceed the target
    pub current_savings: f64,

    /// Contribution periods remaining. Values below 1 are treated as 1.
    pub months_left: i64,

    /// Expected annual return in percent (12 = 12%)
    pub annual_roi: f64,
}

impl GoalInput {
    /// Number of periods actually used in the calculation
    pub fn effective_periods(&self) -> u32 {
        self.months_left.clamp(1, i64::from(u32::MAX)) as u32
    }

    /// Remaining amount to accumulate; negative when the goal is already met
    pub fn amount_needed(&self) -> f64 {
        self.target_amount - self.current_savings
    }
}

/// Household cash flow per period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancesInput {
    pub monthly_income: f64,
    pub fixed_expenses: f64,
}

impl FinancesInput {
    /// Income left after fixed expenses. Can be negative.
    pub fn available_to_save(&self) -> f64 {
        self.monthly_income - self.fixed_expenses
    }
}

/// Outcome of evaluating one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub goal_name: String,

    /// Monthly contribution, rounded to 2 decimal places
    pub monthly_saving_required: f64,

    pub feasible: bool,

    pub advice: String,

    /// Gap between required contribution and available savings (infeasible only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(months_left: i64) -> GoalInput {
        GoalInput {
            goal_name: "House".to_string(),
            target_amount: 100_000.0,
            current_savings: 25_000.0,
            months_left,
            annual_roi: 0.0,
        }
    }

    #[test]
    fn test_effective_periods_clamped() {
        assert_eq!(goal(0).effective_periods(), 1);
        assert_eq!(goal(-5).effective_periods(), 1);
        assert_eq!(goal(1).effective_periods(), 1);
        assert_eq!(goal(36).effective_periods(), 36);
    }

    #[test]
    fn test_amount_needed_may_be_negative() {
        assert_eq!(goal(12).amount_needed(), 75_000.0);

        let exceeded = GoalInput { current_savings: 110_000.0, ..goal(12) };
        assert_eq!(exceeded.amount_needed(), -10_000.0);
    }

    #[test]
    fn test_available_to_save() {
        let finances = FinancesInput { monthly_income: 3_000.0, fixed_expenses: 3_500.0 };
        assert_eq!(finances.available_to_save(), -500.0);
    }

    #[test]
    fn test_plan_result_omits_shortfall_when_absent() {
        let result = PlanResult {
            goal_name: "Car".into(),
            monthly_saving_required: 100.0,
            feasible: true,
            advice: "On track".into(),
            shortfall: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("shortfall").is_none());
        assert_eq!(json["monthly_saving_required"], 100.0);
    }
}
