//! HTTP mapping for `CounterError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use counters_core::error::{ClientCode, CounterError};

/// Error body: `{"Message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    #[serde(rename = "Message")]
    pub message: String,
}

/// `CounterError` as returned from axum handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CounterError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::AlreadyExists => StatusCode::CONFLICT,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(MessageBody {
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
