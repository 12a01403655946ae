//! Shared error type across the counter crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Counter name already taken.
    AlreadyExists,
    /// Counter name unknown.
    NotFound,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::AlreadyExists => "ALREADY_EXISTS",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Counter {0} already exists")]
    AlreadyExists(String),
    #[error("Counter {0} doesn't exist")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CounterError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CounterError::AlreadyExists(_) => ClientCode::AlreadyExists,
            CounterError::NotFound(_) => ClientCode::NotFound,
            CounterError::BadRequest(_) => ClientCode::BadRequest,
            CounterError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CounterError::Internal(_) => ClientCode::Internal,
        }
    }
}
