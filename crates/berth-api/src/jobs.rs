//! Handlers for `/jobs` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/jobs` | No auth |
//! | `POST`   | `/jobs` | Body: a `JobPayload`; author = session user |
//! | `GET`    | `/jobs/:id` | No auth; 404 if absent |
//! | `PUT`    | `/jobs/:id` | Author only |
//! | `DELETE` | `/jobs/:id` | Author only; returns the removed job |
//! | `POST`   | `/jobs/:id/apply` | Non-author, once per user |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use berth_core::{
  job::{Job, JobPayload},
  store::StableMap,
  user::User,
};
use uuid::Uuid;

use crate::{SharedBoard, error::ApiError};

/// `GET /jobs`
pub async fn list<U, J>(
  State(board): State<SharedBoard<U, J>>,
) -> Result<Json<Vec<Job>>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let jobs = board.lock().await.list_jobs().await?;
  Ok(Json(jobs))
}

/// `POST /jobs`
pub async fn create<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let job = board.lock().await.create_job(payload).await?;
  Ok((StatusCode::CREATED, Json(job)))
}

/// `GET /jobs/:id`
pub async fn get_one<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Job>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let job = board.lock().await.get_job(id).await?;
  Ok(Json(job))
}

/// `PUT /jobs/:id`
pub async fn update_one<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Path(id): Path<Uuid>,
  Json(payload): Json<JobPayload>,
) -> Result<Json<Job>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let job = board.lock().await.update_job(id, payload).await?;
  Ok(Json(job))
}

/// `DELETE /jobs/:id`
pub async fn delete_one<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Job>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let job = board.lock().await.delete_job(id).await?;
  Ok(Json(job))
}

/// `POST /jobs/:id/apply`
pub async fn apply_one<U, J>(
  State(board): State<SharedBoard<U, J>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Job>, ApiError>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  let job = board.lock().await.apply_to_job(id).await?;
  Ok(Json(job))
}
