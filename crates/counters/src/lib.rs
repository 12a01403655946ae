//! Top-level facade crate for the counter service.
//!
//! Re-exports the core domain types and the HTTP server library so users can depend on a
//! single crate.

pub mod core {
    pub use counters_core::*;
}

pub mod server {
    pub use counters_server::*;
}
