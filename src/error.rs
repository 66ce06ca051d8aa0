use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use crate::storage::StorageError;

/// Everything that can fail a listing request.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("{0}")]
    Storage(#[from] StorageError),
    #[error("listing did not complete within {} seconds", .0.as_secs())]
    Timeout(Duration),
}

impl ListError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            ListError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
