//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// A core error crossing the HTTP boundary. The response body carries the
/// domain message verbatim; the variant picks the status code.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub berth_core::Error);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use berth_core::Error;

    let (status, message) = match self.0 {
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m),
      Error::InvalidPayload(m) => (StatusCode::BAD_REQUEST, m),
      Error::AuthenticationError(m) => (StatusCode::UNAUTHORIZED, m),
      Error::DuplicateUser(m) => (StatusCode::CONFLICT, m),
      Error::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
