//! Endpoint handlers

use super::{ApiError, ServiceContext};
use crate::error::ValidationError;
use crate::market::{lookup_market_caps, parse_symbols, FundRecord, MarketCapQuote, ReturnHorizon};
use crate::planner::{evaluate_batch, evaluate_goal, PlanResult};
use crate::request::{coerce_number, GoalRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

type Shared = State<Arc<ServiceContext>>;

/// Blank query values count as absent
fn param(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn malformed(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(ValidationError::MalformedBody(rejection.body_text()).to_string())
}

pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(super) async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

pub(super) async fn not_found(uri: Uri) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}

pub(super) async fn plan(
    State(ctx): Shared,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlanResult>, ApiError> {
    let Json(body) = payload.map_err(malformed)?;
    let (goal, finances) = GoalRequest::from_value(body)
        .and_then(|request| request.validate(ctx.today()))
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(evaluate_goal(&goal, &finances)))
}

#[derive(Deserialize)]
pub(super) struct BatchRequest {
    goals: Vec<Value>,
}

#[derive(Serialize)]
pub(super) struct Results<T> {
    results: Vec<T>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub(super) enum BatchEntry {
    Plan(PlanResult),
    Invalid { error: String },
}

pub(super) async fn plan_batch(
    State(ctx): Shared,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<Results<BatchEntry>>, ApiError> {
    let Json(BatchRequest { goals }) = payload.map_err(malformed)?;
    if goals.len() > ctx.config.max_batch_goals {
        return Err(ApiError::bad_request(format!(
            "at most {} goals per batch, got {}",
            ctx.config.max_batch_goals,
            goals.len()
        )));
    }

    let requests = goals
        .into_iter()
        .enumerate()
        .map(|(idx, goal)| GoalRequest::from_value(goal).map_err(|e| ApiError::bad_request(format!("goals[{idx}]: {e}"))))
        .collect::<Result<Vec<_>, _>>()?;

    let results = evaluate_batch(&requests, ctx.today())
        .into_iter()
        .map(|result| match result {
            Ok(plan) => BatchEntry::Plan(plan),
            Err(e) => BatchEntry::Invalid { error: e.to_string() },
        })
        .collect();
    Ok(Json(Results { results }))
}

#[derive(Debug, Deserialize)]
pub(super) struct TopFundsParams {
    horizon: Option<String>,
    limit: Option<String>,
    category: Option<String>,
}

#[derive(Serialize)]
pub(super) struct TopFunds {
    horizon: ReturnHorizon,
    category: Option<String>,
    funds: Vec<FundRecord>,
}

pub(super) async fn top_funds(
    State(ctx): Shared,
    Query(params): Query<TopFundsParams>,
) -> Result<Json<TopFunds>, ApiError> {
    let horizon = match param(&params.horizon) {
        Some(raw) => raw.parse::<ReturnHorizon>().map_err(ApiError::bad_request)?,
        None => ReturnHorizon::default(),
    };

    let limit = match param(&params.limit) {
        Some(raw) => {
            let n = raw
                .parse::<usize>()
                .map_err(|_| ApiError::bad_request(format!("limit must be a non-negative integer, got '{raw}'")))?;
            if n > ctx.config.max_funds_limit {
                return Err(ApiError::bad_request(format!(
                    "limit {n} exceeds the maximum of {}",
                    ctx.config.max_funds_limit
                )));
            }
            n
        }
        None => ctx.config.top_funds_limit,
    };

    let category = param(&params.category);
    let funds = ctx.funds.top(horizon, limit, category).into_iter().cloned().collect();
    Ok(Json(TopFunds {
        horizon,
        category: category.map(str::to_string),
        funds,
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct MarketCapsParams {
    symbols: Option<String>,
    symbol: Option<String>,
}

pub(super) async fn market_caps(
    State(ctx): Shared,
    Query(params): Query<MarketCapsParams>,
) -> Result<Json<Results<MarketCapQuote>>, ApiError> {
    let raw = param(&params.symbols).or_else(|| param(&params.symbol));
    let symbols = raw.map(parse_symbols).unwrap_or_default();
    if symbols.is_empty() {
        return Err(ApiError::bad_request("query parameter 'symbols' is required"));
    }

    match lookup_market_caps(ctx.market.as_ref(), &symbols) {
        Ok(results) => Ok(Json(Results { results })),
        Err(e) => {
            error!("Market data lookup failed for {:?}: {}", symbols, e);
            Err(ApiError::new(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct AddParams {
    a: Option<String>,
    b: Option<String>,
}

pub(super) async fn add(Query(params): Query<AddParams>) -> Result<Json<Value>, ApiError> {
    let operand = |name: &'static str, value: &Option<String>| -> Result<f64, ApiError> {
        let raw = param(value)
            .ok_or_else(|| ApiError::bad_request(format!("missing required query parameter '{name}'")))?;
        coerce_number(name, &Value::String(raw.to_string())).map_err(|e| ApiError::bad_request(e.to_string()))
    };

    let a = operand("a", &params.a)?;
    let b = operand("b", &params.b)?;
    let sum = a + b;
    if !sum.is_finite() {
        return Err(ApiError::bad_request(format!("sum of {a} and {b} is not a finite number")));
    }
    Ok(Json(json!({ "a": a, "b": b, "sum": sum })))
}
