//! Error types for `berth-core`.
//!
//! The first four variants are the closed domain taxonomy; every one carries
//! the caller-visible message verbatim. `Store` is the carrier for backend
//! faults surfaced by the durable-store collaborator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),

  /// Reserved in the taxonomy; no current operation produces it.
  #[error("invalid payload: {0}")]
  InvalidPayload(String),

  #[error("authentication error: {0}")]
  AuthenticationError(String),

  #[error("duplicate user: {0}")]
  DuplicateUser(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend fault in the [`Error::Store`] carrier.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
