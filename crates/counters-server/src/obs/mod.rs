//! Lightweight in-process metrics.
//!
//! Metrics are stored as atomics in `DashMap`s and rendered in Prometheus text format by
//! the `/metrics` handler. No metrics crate is pulled in.

pub mod metrics;

pub use metrics::ServiceMetrics;
