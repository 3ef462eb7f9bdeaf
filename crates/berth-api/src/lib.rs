//! JSON REST API for Berth.
//!
//! Exposes an axum [`Router`] over a [`JobBoard`] backed by any pair of
//! [`StableMap`]s. This layer only translates HTTP into typed payloads and
//! back; every rule lives in `berth-core`.
//!
//! The whole board sits behind one [`tokio::sync::Mutex`], serialising
//! operations: the modeled host ran one call at a time, and the single
//! session slot depends on that.

pub mod error;
pub mod jobs;
pub mod session;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use berth_core::{board::JobBoard, job::Job, store::StableMap, user::User};
use tokio::sync::Mutex;
use uuid::Uuid;

pub use error::ApiError;

/// The board as shared by all handlers.
pub type SharedBoard<U, J> = Arc<Mutex<JobBoard<U, J>>>;

/// Build a fully-materialised API router for `board`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<U, J>(board: SharedBoard<U, J>) -> Router<()>
where
  U: StableMap<Uuid, User> + 'static,
  J: StableMap<Uuid, Job> + 'static,
{
  Router::new()
    // Users
    .route("/users", post(users::register::<U, J>))
    // Session
    .route(
      "/session",
      get(session::current::<U, J>)
        .post(session::login::<U, J>)
        .delete(session::logout::<U, J>),
    )
    // Jobs
    .route("/jobs", get(jobs::list::<U, J>).post(jobs::create::<U, J>))
    .route(
      "/jobs/{id}",
      get(jobs::get_one::<U, J>)
        .put(jobs::update_one::<U, J>)
        .delete(jobs::delete_one::<U, J>),
    )
    .route("/jobs/{id}/apply", post(jobs::apply_one::<U, J>))
    .with_state(board)
}
