//! Evaluate a single savings goal from the command line
//!
//! Example:
//!   plan_goal --goal-name "Car" --target-amount 120000 --monthly-income 15000 \
//!             --fixed-expenses 5000 --current-savings 0 --months-left 12 --annual-roi 0

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use savings_planner::{evaluate_goal, GoalRequest};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "plan_goal", about = "Required monthly saving and feasibility for one goal")]
struct Args {
    /// Label for the goal
    #[arg(long)]
    goal_name: String,

    #[arg(long, allow_negative_numbers = true)]
    target_amount: f64,

    #[arg(long, allow_negative_numbers = true)]
    monthly_income: f64,

    #[arg(long, allow_negative_numbers = true)]
    fixed_expenses: f64,

    #[arg(long, allow_negative_numbers = true)]
    current_savings: f64,

    /// Contribution months remaining [default: 12]
    #[arg(long, allow_negative_numbers = true)]
    months_left: Option<i64>,

    /// Expected annual return in percent [default: 12]
    #[arg(long, allow_negative_numbers = true)]
    annual_roi: Option<f64>,

    /// Deadline (YYYY-MM-DD), used when --months-left is not given
    #[arg(long)]
    target_date: Option<String>,

    /// Date to count months from [default: today, UTC]
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

impl Args {
    /// NaN and infinities parse as f64 but are not amounts
    fn check_finite(&self) -> Result<()> {
        let amounts = [
            ("--target-amount", Some(self.target_amount)),
            ("--monthly-income", Some(self.monthly_income)),
            ("--fixed-expenses", Some(self.fixed_expenses)),
            ("--current-savings", Some(self.current_savings)),
            ("--annual-roi", self.annual_roi),
        ];
        for (flag, value) in amounts {
            if let Some(v) = value {
                if !v.is_finite() {
                    bail!("{flag} must be a finite number, got {v}");
                }
            }
        }
        Ok(())
    }
}

impl From<&Args> for GoalRequest {
    fn from(args: &Args) -> Self {
        GoalRequest {
            goal_name: Some(args.goal_name.clone()),
            target_amount: Some(Value::from(args.target_amount)),
            monthly_income: Some(Value::from(args.monthly_income)),
            fixed_expenses: Some(Value::from(args.fixed_expenses)),
            current_savings: Some(Value::from(args.current_savings)),
            months_left: args.months_left.map(Value::from),
            annual_roi: args.annual_roi.map(Value::from),
            target_date: args.target_date.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    args.check_finite()?;

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let (goal, finances) = GoalRequest::from(&args)
        .validate(today)
        .context("Invalid goal")?;

    let result = evaluate_goal(&goal, &finances);
    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "plan_goal",
            "--goal-name",
            "Car",
            "--target-amount",
            "120000",
            "--monthly-income",
            "15000",
            "--fixed-expenses",
            "5000",
            "--current-savings",
            "0",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_finite_args_accepted() {
        let args = args(&["--annual-roi", "-6", "--months-left", "24"]);
        assert!(args.check_finite().is_ok());

        let (goal, _) = GoalRequest::from(&args).validate(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()).unwrap();
        assert_eq!(goal.annual_roi, -6.0);
        assert_eq!(goal.months_left, 24);
    }

    #[test]
    fn test_nan_amount_rejected_by_flag_name() {
        let mut args = args(&[]);
        args.target_amount = "NaN".parse().unwrap();
        let err = args.check_finite().unwrap_err().to_string();
        assert!(err.contains("--target-amount"), "{err}");
        assert!(!err.contains("missing"));
    }

    #[test]
    fn test_infinite_rate_rejected() {
        let args = args(&["--annual-roi", "inf"]);
        let err = args.check_finite().unwrap_err().to_string();
        assert!(err.contains("--annual-roi"), "{err}");
    }
}
