//! Goal request schema

use super::numeric::{coerce_integer, coerce_number};
use crate::error::ValidationError;
use crate::planner::{FinancesInput, GoalInput, DEFAULT_ANNUAL_ROI, DEFAULT_MONTHS_LEFT};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Goal evaluation request as received from a client.
///
/// Numeric fields are kept as raw JSON values until `validate` so that a
/// bad field can be reported by name instead of as a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalRequest {
    #[serde(default)]
    pub goal_name: Option<String>,

    #[serde(default)]
    pub target_amount: Option<Value>,

    #[serde(default)]
    pub monthly_income: Option<Value>,

    #[serde(default)]
    pub fixed_expenses: Option<Value>,

    #[serde(default)]
    pub current_savings: Option<Value>,

    /// Defaults to 12 when omitted
    #[serde(default)]
    pub months_left: Option<Value>,

    /// Percent, defaults to 12 when omitted
    #[serde(default)]
    pub annual_roi: Option<Value>,

    /// Deadline as `YYYY-MM-DD`; used to derive `months_left` when that is omitted
    #[serde(default)]
    pub target_date: Option<String>,
}

impl GoalRequest {
    /// Parse a request body. The body must be a JSON object.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build a request from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::MalformedBody(format!(
                "expected an object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ValidationError::MalformedBody(e.to_string()))
    }

    /// Validate every field and produce typed engine inputs.
    ///
    /// `today` anchors `target_date`; it is only read when `months_left`
    /// is absent and a date is given.
    pub fn validate(&self, today: NaiveDate) -> Result<(GoalInput, FinancesInput), ValidationError> {
        let goal_name = match &self.goal_name {
            None => return Err(ValidationError::MissingField("goal_name")),
            Some(name) if name.trim().is_empty() => return Err(ValidationError::EmptyGoalName),
            Some(name) => name.clone(),
        };

        let target_amount = required_number("target_amount", &self.target_amount)?;
        let monthly_income = required_number("monthly_income", &self.monthly_income)?;
        let fixed_expenses = required_number("fixed_expenses", &self.fixed_expenses)?;
        let current_savings = required_number("current_savings", &self.current_savings)?;

        let months_left = match (&self.months_left, &self.target_date) {
            (Some(months), _) => coerce_integer("months_left", months)?,
            (None, Some(date)) => {
                let deadline = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate(date.clone()))?;
                months_until(today, deadline)
            }
            (None, None) => DEFAULT_MONTHS_LEFT,
        };

        let annual_roi = match &self.annual_roi {
            Some(roi) => coerce_number("annual_roi", roi)?,
            None => DEFAULT_ANNUAL_ROI,
        };
        // Monthly growth factor 1 + roi/1200 must stay positive
        if annual_roi <= -1200.0 {
            return Err(ValidationError::RateOutOfRange(annual_roi));
        }

        let goal = GoalInput {
            goal_name,
            target_amount,
            current_savings,
            months_left,
            annual_roi,
        };
        let finances = FinancesInput { monthly_income, fixed_expenses };
        Ok((goal, finances))
    }
}

fn required_number(field: &'static str, value: &Option<Value>) -> Result<f64, ValidationError> {
    match value {
        Some(v) => coerce_number(field, v),
        None => Err(ValidationError::MissingField(field)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whole calendar months from `from` until `to`.
///
/// A month only counts once its day-of-month is reached, so
/// 2024-01-31 → 2024-02-29 is 0 months. Negative when `to` is in the past.
pub fn months_until(from: NaiveDate, to: NaiveDate) -> i64 {
    let mut months = i64::from(to.year() - from.year()) * 12
        + i64::from(to.month()) - i64::from(from.month());
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}
