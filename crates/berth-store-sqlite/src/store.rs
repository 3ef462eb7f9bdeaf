//! [`SqliteStore`] — a single SQLite file holding both stable maps.

use std::path::Path;

use berth_core::{job::Job, user::User};
use uuid::Uuid;

use crate::{Result, map::SqliteMap, schema::SCHEMA};

/// The Berth durable store: one SQLite file, two independently-keyed
/// tables (`users`, `jobs`).
///
/// Cloning is cheap — the inner connection is reference-counted, and the
/// map handles returned by [`users`](Self::users) and [`jobs`](Self::jobs)
/// share it.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// The user map, keyed by user id.
  pub fn users(&self) -> SqliteMap<Uuid, User> {
    SqliteMap::new(self.conn.clone(), "users")
  }

  /// The job map, keyed by job id.
  pub fn jobs(&self) -> SqliteMap<Uuid, Job> {
    SqliteMap::new(self.conn.clone(), "jobs")
  }
}
