//! Evaluate every goal in a CSV file
//!
//! Input columns match the goal request fields (goal_name, target_amount,
//! monthly_income, fixed_expenses, current_savings, months_left, annual_roi,
//! target_date). Rows are validated and evaluated in parallel; invalid rows
//! are reported in the output's `error` column instead of aborting the run.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use log::warn;
use savings_planner::planner::evaluate_batch;
use savings_planner::GoalRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "plan_batch", about = "Evaluate savings goals from a CSV file")]
struct Args {
    /// Goals CSV
    #[arg(long)]
    input: PathBuf,

    /// Where to write results
    #[arg(long, default_value = "plan_output.csv")]
    output: PathBuf,

    /// Date to count months from when rows use target_date [default: today, UTC]
    #[arg(long)]
    today: Option<NaiveDate>,
}

/// Raw CSV row; every cell is text until validation
#[derive(Debug, Deserialize)]
struct GoalRow {
    goal_name: Option<String>,
    target_amount: Option<String>,
    monthly_income: Option<String>,
    fixed_expenses: Option<String>,
    current_savings: Option<String>,
    #[serde(default)]
    months_left: Option<String>,
    #[serde(default)]
    annual_roi: Option<String>,
    #[serde(default)]
    target_date: Option<String>,
}

impl From<GoalRow> for GoalRequest {
    fn from(row: GoalRow) -> Self {
        GoalRequest {
            goal_name: row.goal_name,
            target_amount: row.target_amount.map(Value::String),
            monthly_income: row.monthly_income.map(Value::String),
            fixed_expenses: row.fixed_expenses.map(Value::String),
            current_savings: row.current_savings.map(Value::String),
            months_left: row.months_left.map(Value::String),
            annual_roi: row.annual_roi.map(Value::String),
            target_date: row.target_date,
        }
    }
}

#[derive(Debug, Serialize)]
struct OutputRow {
    row: usize,
    goal_name: String,
    monthly_saving_required: Option<f64>,
    feasible: Option<bool>,
    shortfall: Option<f64>,
    advice: String,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());

    let start = Instant::now();
    println!("Loading goals from {}...", args.input.display());

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    let mut requests = Vec::new();
    for (idx, row) in reader.deserialize::<GoalRow>().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV row {}", idx + 1))?;
        requests.push(GoalRequest::from(row));
    }
    println!("Loaded {} goals in {:?}", requests.len(), start.elapsed());

    let eval_start = Instant::now();
    let results = evaluate_batch(&requests, today);
    println!("Evaluated in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut feasible = 0usize;
    let mut infeasible = 0usize;
    let mut invalid = 0usize;

    for (idx, (request, result)) in requests.iter().zip(results).enumerate() {
        let goal_name = request.goal_name.clone().unwrap_or_default();
        let out = match result {
            Ok(plan) => {
                if plan.feasible {
                    feasible += 1;
                } else {
                    infeasible += 1;
                }
                OutputRow {
                    row: idx + 1,
                    goal_name,
                    monthly_saving_required: Some(plan.monthly_saving_required),
                    feasible: Some(plan.feasible),
                    shortfall: plan.shortfall,
                    advice: plan.advice,
                    error: String::new(),
                }
            }
            Err(e) => {
                invalid += 1;
                warn!("Row {} ({}): {}", idx + 1, goal_name, e);
                OutputRow {
                    row: idx + 1,
                    goal_name,
                    monthly_saving_required: None,
                    feasible: None,
                    shortfall: None,
                    advice: String::new(),
                    error: e.to_string(),
                }
            }
        };
        writer.serialize(out)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Feasible:   {}", feasible);
    println!("  Infeasible: {}", infeasible);
    println!("  Invalid:    {}", invalid);
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
