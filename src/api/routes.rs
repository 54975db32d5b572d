//! Route table and request logging

use super::handlers;
use super::ServiceContext;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use std::sync::Arc;

/// Every planner endpoint bound to `ctx`.
///
/// Unknown paths get a JSON 404; a known path with the wrong method is
/// answered 405 by the router itself.
pub fn router(ctx: Arc<ServiceContext>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/hello", get(handlers::hello))
        .route("/plan", post(handlers::plan))
        .route("/plan/batch", post(handlers::plan_batch))
        .route("/funds/top", get(handlers::top_funds))
        .route("/market-caps", get(handlers::market_caps))
        .route("/add", get(handlers::add))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(ctx)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        warn!("{} {} -> {}", method, path, status.as_u16());
    } else {
        info!("{} {} -> {}", method, path, status.as_u16());
    }
    response
}
