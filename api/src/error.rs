//! Error type shared by every HTTP handler and guard.
//!
//! Client-caused failures carry a short, user-facing body. Infrastructure
//! failures are logged in full and answered with an opaque `500 Server Error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;

/// One failed field in a `400` validation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub value: String,
    pub msg: String,
    pub param: &'static str,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(param: &'static str, value: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            msg: msg.into(),
            param,
            location: "body",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "msg": msg }))).into_response()
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database failure while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}
