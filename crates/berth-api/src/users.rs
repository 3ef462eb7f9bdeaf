//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/users` | Body: a `UserPayload`; 409 on duplicate |

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use berth_core::{
  job::Job,
  store::StableMap,
  user::{User, UserPayload},
};
use uuid::Uuid;

use crate::{SharedBoard, error::ApiError};

/// `POST /users` — register. Echoes the stored record, as the modeled
/// system did.
pub async fn register<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let user = board.lock().await.register_user(payload).await?;
  Ok((StatusCode::CREATED, Json(user)))
}
