//! Handlers for the `/session` endpoints — the single process-wide session.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/session` | Body: `{"username":…,"password":…}` |
//! | `GET`    | `/session` | Current username; 401 when logged out |
//! | `DELETE` | `/session` | Logout; 401 when already logged out |

use axum::{Json, extract::State};
use berth_core::{job::Job, store::StableMap, user::User};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{SharedBoard, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: String,
  pub password: String,
}

/// `POST /session` — login. A new login overwrites any existing session.
pub async fn login<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let message = board
    .lock()
    .await
    .login_user(&body.username, &body.password)
    .await?;
  Ok(Json(json!({ "message": message })))
}

/// `DELETE /session` — logout.
pub async fn logout<U, J>(
  State(board): State<SharedBoard<U, J>>,
) -> Result<Json<Value>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let message = board.lock().await.log_out()?;
  Ok(Json(json!({ "message": message })))
}

/// `GET /session` — the current username.
pub async fn current<U, J>(
  State(board): State<SharedBoard<U, J>>,
) -> Result<Json<Value>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let username = board.lock().await.current_user()?;
  Ok(Json(json!({ "username": username })))
}
