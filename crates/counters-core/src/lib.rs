//! Counter service core: the counter model, its wire shape, the store abstraction and the
//! shared error type.
//!
//! This crate carries no transport or runtime dependencies. The HTTP layer lives in
//! `counters-server`, and tests can drive a store directly without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `CounterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{CounterError, Result};
pub use model::Counter;
pub use store::{CounterStore, InMemoryCounterStore};
