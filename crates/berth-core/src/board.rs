//! [`JobBoard`] — the facade exposing the external operations.
//!
//! Owns the user directory, the job catalog, and the single session slot,
//! and sequences session-check → directory/catalog call. Privileged
//! operations never fall through to anonymous access: a missing session is
//! always an authentication error.

use uuid::Uuid;

use crate::{
  Error, Result,
  catalog::JobCatalog,
  directory::UserDirectory,
  job::{Job, JobPayload},
  session::SessionManager,
  store::StableMap,
  user::{User, UserPayload},
};

/// The whole board: two independently-keyed maps plus the session slot.
/// Session transitions take `&mut self`, so a single `JobBoard` value
/// preserves the one-call-at-a-time model by construction; a multi-threaded
/// embedding must serialise access (see `berth-api`).
pub struct JobBoard<U, J> {
  directory: UserDirectory<U>,
  catalog:   JobCatalog<J>,
  session:   SessionManager,
}

impl<U, J> JobBoard<U, J>
where
  U: StableMap<Uuid, User>,
  J: StableMap<Uuid, Job>,
{
  pub fn new(users: U, jobs: J) -> Self {
    Self {
      directory: UserDirectory::new(users),
      catalog:   JobCatalog::new(jobs),
      session:   SessionManager::default(),
    }
  }

  /// The session user required by privileged operations.
  fn signed_in(&self) -> Result<&User> {
    self.session.user().ok_or_else(|| {
      Error::AuthenticationError("you need to login first.".into())
    })
  }

  // ── Users and session ─────────────────────────────────────────────────────

  pub async fn register_user(&self, payload: UserPayload) -> Result<User> {
    self.directory.register(payload).await
  }

  pub async fn login_user(
    &mut self,
    username: &str,
    password: &str,
  ) -> Result<String> {
    let user = self.directory.authenticate(username, password).await?;
    let message = format!("Logged in as {}", user.username);
    self.session.login(user);
    Ok(message)
  }

  pub fn log_out(&mut self) -> Result<String> {
    self.session.logout()?;
    Ok("Logged out successfully.".into())
  }

  pub fn current_user(&self) -> Result<String> {
    Ok(self.session.current()?.username.clone())
  }

  // ── Jobs ──────────────────────────────────────────────────────────────────

  pub async fn create_job(&self, payload: JobPayload) -> Result<Job> {
    let author = self.signed_in()?.clone();
    self.catalog.create(&author, payload).await
  }

  /// No auth required.
  pub async fn list_jobs(&self) -> Result<Vec<Job>> {
    self.catalog.list().await
  }

  /// No auth required.
  pub async fn get_job(&self, id: Uuid) -> Result<Job> {
    self.catalog.get(id).await
  }

  pub async fn update_job(
    &self,
    id: Uuid,
    payload: JobPayload,
  ) -> Result<Job> {
    let editor = self.signed_in()?.clone();
    self.catalog.update(&editor, id, payload).await
  }

  pub async fn delete_job(&self, id: Uuid) -> Result<Job> {
    let editor = self.signed_in()?.clone();
    self.catalog.delete(&editor, id).await
  }

  pub async fn apply_to_job(&self, id: Uuid) -> Result<Job> {
    let applicant = self.signed_in()?.clone();
    self.catalog.apply(&applicant, id).await
  }
}
