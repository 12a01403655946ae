//! Resource endpoints.

pub mod counters;
