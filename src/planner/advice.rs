//! Human-readable guidance attached to a plan

/// Guidance returned when the contribution fits the budget
pub const FEASIBLE_ADVICE: &str = "Your goal is achievable with your current finances. Keep investing consistently.";

/// Advice text for a plan. `shortfall` is `None` when the goal is affordable.
pub fn advice_for(shortfall: Option<f64>) -> String {
    match shortfall {
        None => FEASIBLE_ADVICE.to_string(),
        Some(gap) => format!(
            "You need {gap:.2} more per month than you can currently save. \
             Increase your monthly investment or extend your timeline to reach this goal."
        ),
    }
}
