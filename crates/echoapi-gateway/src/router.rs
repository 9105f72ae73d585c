//! Axum router wiring.
//!
//! `/api` answers GET/POST/PUT/DELETE; any other method gets the router's
//! 405. `/metrics` and `/healthz` are GET only.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            handlers::ECHO_ENDPOINT,
            get(handlers::echo)
                .post(handlers::echo)
                .put(handlers::echo)
                .delete(handlers::echo),
        )
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
