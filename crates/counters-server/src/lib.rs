//! Counter service library entry.
//!
//! Wires config, application state, the counter resource, ops endpoints and metrics into
//! an axum router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod http_error;
pub mod obs;
pub mod ops;
pub mod router;
