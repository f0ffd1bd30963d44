use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::modules::entries::store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Missing or malformed required field; the message is the wire message.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON body for 4xx responses: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
            }
            ApplicationError::Store(err) => {
                tracing::error!(error = %err, "entry store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
