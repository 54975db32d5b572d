//! Sinking-fund contribution and feasibility verdict

use super::advice::advice_for;
use super::{FinancesInput, GoalInput, PlanResult};
use log::debug;

/// Monthly contribution that compounds to `amount_needed` after `periods` months.
///
/// The annual rate is a percentage and is compounded monthly
/// (`annual_roi_percent / 12 / 100` per period). A rate of exactly zero
/// falls back to linear division, the limit of the annuity formula.
///
/// # Arguments
/// * `amount_needed` - Target minus current savings; negative when already met
/// * `periods` - Number of monthly contributions, at least 1
/// * `annual_roi_percent` - Expected annual return (12.0 = 12%)
///
/// # Returns
/// Required contribution per period. Not clamped: a negative amount needed
/// gives a negative contribution.
pub fn compute_required_contribution(amount_needed: f64, periods: u32, annual_roi_percent: f64) -> f64 {
    let monthly_rate = annual_roi_percent / 12.0 / 100.0;
    let n = f64::from(periods.max(1));

    if monthly_rate == 0.0 {
        return amount_needed / n;
    }

    // FV of an ordinary annuity: P * ((1+r)^n - 1) / r, solved for P.
    // (1+r)^n - 1 via ln_1p/exp_m1 keeps precision when 1 + r rounds to 1.
    let growth = (n * monthly_rate.ln_1p()).exp_m1();
    amount_needed * (monthly_rate / growth)
}

/// Evaluate a single goal against the household's finances
pub fn evaluate_goal(goal: &GoalInput, finances: &FinancesInput) -> PlanResult {
    let periods = goal.effective_periods();
    let required = compute_required_contribution(goal.amount_needed(), periods, goal.annual_roi);
    let available = finances.available_to_save();

    // Equality counts as affordable
    let feasible = required <= available;
    let shortfall = if feasible {
        None
    } else {
        Some(round_to_cents(required - available))
    };

    debug!(
        "goal '{}': periods={}, required={:.4}, available={:.2}, feasible={}",
        goal.goal_name, periods, required, available, feasible
    );

    PlanResult {
        goal_name: goal.goal_name.clone(),
        monthly_saving_required: round_to_cents(required),
        feasible,
        advice: advice_for(shortfall),
        shortfall,
    }
}

/// Round to 2 decimal places, normalizing negative zero.
///
/// Ties go to the even cent (0.125 -> 0.12, 0.375 -> 0.38), the same
/// banker's rounding the planner has always reported. Values too large to
/// scale by 100 are returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
