//! `/counters/{name}` resource.
//!
//! - `POST` creates the counter at 0 (201, or 409 if the name is taken)
//! - `PUT` increments it by one (200, or 404)
//! - `GET` reads it (200, or 404)
//!
//! Success bodies are the counter itself: `{"<name>": <value>}`.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use counters_core::error::Result;
use counters_core::Counter;

use crate::app_state::AppState;
use crate::http_error::ApiError;

pub async fn create_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    tracing::info!(counter = %name, "request to create counter");
    respond(&state, "create", StatusCode::CREATED, || state.store().create(&name))
}

pub async fn update_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    tracing::info!(counter = %name, "request to update counter");
    respond(&state, "update", StatusCode::OK, || state.store().increment(&name))
}

pub async fn read_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    tracing::debug!(counter = %name, "request to read counter");
    respond(&state, "read", StatusCode::OK, || state.store().get(&name))
}

fn respond(
    state: &AppState,
    op: &'static str,
    ok: StatusCode,
    run: impl FnOnce() -> Result<Counter>,
) -> Response {
    let started = Instant::now();
    let res = run();

    let resp = match res {
        Ok(counter) => {
            tracing::debug!(op, counter = %counter.name, value = counter.value, "counter ok");
            (ok, Json(counter)).into_response()
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::info!(op, code = err.0.client_code().as_str(), "{err}");
            err.into_response()
        }
    };

    state
        .metrics()
        .observe_request(op, resp.status().as_u16(), started.elapsed());
    resp
}
