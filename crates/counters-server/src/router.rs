//! Axum router wiring.
//!
//! One resource path for counters plus the ops endpoints.

use axum::{routing::get, Router};

use crate::{api::counters, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters/:name",
            get(counters::read_counter)
                .post(counters::create_counter)
                .put(counters::update_counter),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
