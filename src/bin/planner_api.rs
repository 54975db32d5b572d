//! AWS Lambda entry point for the planner HTTP API
//!
//! Configuration comes from the environment (see `ServiceConfig::from_env`);
//! datasets are loaded once at cold start and shared by every invocation.

use lambda_http::run;
use lambda_runtime::Error;
use log::info;
use savings_planner::api::{router, ServiceContext};
use savings_planner::ServiceConfig;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = ServiceConfig::from_env()?;
    let ctx = Arc::new(ServiceContext::load(config)?);
    info!("Starting planner API");

    run(router(ctx)).await
}
