//! Evaluate many independent goals at once

use super::{evaluate_goal, PlanResult};
use crate::error::ValidationError;
use crate::request::GoalRequest;
use chrono::NaiveDate;
use rayon::prelude::*;

/// Validate and evaluate each request in parallel.
///
/// Goals are evaluated independently; output order matches input order and
/// one invalid request does not affect the others.
pub fn evaluate_batch(requests: &[GoalRequest], today: NaiveDate) -> Vec<Result<PlanResult, ValidationError>> {
    requests
        .par_iter()
        .map(|request| -> Result<PlanResult, ValidationError> {
            let (goal, finances) = request.validate(today)?;
            Ok(evaluate_goal(&goal, &finances))
        })
        .collect()
}
