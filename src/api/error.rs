//! HTTP mapping for `EnumSelectError`

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::EnumSelectError;

pub struct AppError(EnumSelectError);

impl From<EnumSelectError> for AppError {
    fn from(err: EnumSelectError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::debug!(%status, error = %self.0, "request failed");

        let body = match &self.0 {
            EnumSelectError::Validation(errors) => {
                let mut fields: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
                for e in errors {
                    fields.entry(e.field).or_default().push(e.message.as_str());
                }
                json!({ "error": self.0.to_string(), "fields": fields })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
