//! Error types for ledgerview-api
//!
//! Load and parse failures reach clients only as a fixed message per
//! endpoint; the cause is logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to load data")]
    LoadFailed,

    #[error("Failed to search data")]
    SearchFailed,

    #[error("{message}")]
    BadRequest { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::LoadFailed | ApiError::SearchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
