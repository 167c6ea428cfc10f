use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{error::ApiError, sanitize};

/// JSON body extractor that runs [`sanitize::strip_operator_keys`] before
/// deserializing into `T`.
///
/// A missing body, or one sent without a JSON content type, reads as `{}` so
/// field validation still reports every absent field. Only bodies that claim
/// to be JSON and fail to parse become `400 { "msg": ... }`.
pub struct SanitizedJson<T>(pub T);

fn is_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S, T> FromRequest<S> for SanitizedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(&req);
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
        })?;

        let raw = if !is_json || bytes.trim_ascii().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?
        };

        serde_json::from_value(sanitize::strip_operator_keys(raw))
            .map(SanitizedJson)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
    }
}
