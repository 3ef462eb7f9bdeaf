//! [`JobCatalog`] — posting CRUD and the apply workflow over a job map.
//!
//! Authorization is split in two: the facade resolves the session (absence
//! is always an authentication error), and the catalog enforces ownership
//! against the resolved user it is handed.

use uuid::Uuid;

use crate::{
  Error, Result,
  job::{Job, JobPayload},
  store::StableMap,
  user::User,
};

pub struct JobCatalog<S> {
  store: S,
}

impl<S> JobCatalog<S>
where
  S: StableMap<Uuid, Job>,
{
  pub fn new(store: S) -> Self { Self { store } }

  /// Create a posting authored by `author`.
  ///
  /// The fresh random id is not checked against existing keys before
  /// insert; on the (probabilistically negligible) collision the insert
  /// overwrites, as in the modeled system.
  pub async fn create(&self, author: &User, payload: JobPayload) -> Result<Job> {
    let job = Job::new(author, payload);
    self
      .store
      .insert(job.id, job.clone())
      .await
      .map_err(Error::store)?;
    Ok(job)
  }

  /// All postings in store key order.
  pub async fn list(&self) -> Result<Vec<Job>> {
    self.store.values().await.map_err(Error::store)
  }

  pub async fn get(&self, id: Uuid) -> Result<Job> {
    self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::NotFound(format!("cannot find job with {id} id")))
  }

  /// Overwrite the payload fields of posting `id`. Only the author may
  /// update; everything the payload omits is left unchanged.
  pub async fn update(
    &self,
    editor: &User,
    id: Uuid,
    payload: JobPayload,
  ) -> Result<Job> {
    let mut job = self.get(id).await?;
    if job.author_id != editor.id {
      return Err(Error::AuthenticationError(
        "you are not this job owner.".into(),
      ));
    }

    job.merge(payload);
    self
      .store
      .insert(job.id, job.clone())
      .await
      .map_err(Error::store)?;
    Ok(job)
  }

  /// Permanently remove posting `id`. Only the author may delete.
  pub async fn delete(&self, editor: &User, id: Uuid) -> Result<Job> {
    let job = self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| {
        Error::NotFound(format!("cannot delete job with {id} id"))
      })?;
    if job.author_id != editor.id {
      return Err(Error::AuthenticationError(
        "you are not this job owner.".into(),
      ));
    }

    let removed = self.store.remove(id).await.map_err(Error::store)?;
    // The preceding get guarantees presence; one call runs at a time.
    Ok(removed.unwrap_or(job))
  }

  /// Record `applicant`'s interest in posting `id`, once per user.
  /// The author may never apply to their own posting.
  pub async fn apply(&self, applicant: &User, id: Uuid) -> Result<Job> {
    let mut job = self.get(id).await?;
    if job.author_id == applicant.id {
      return Err(Error::AuthenticationError(
        "can't apply to your own job".into(),
      ));
    }
    if job.applies.contains(&applicant.id) {
      return Err(Error::DuplicateUser(
        "you already applied to this job.".into(),
      ));
    }

    job.record_apply(applicant.id);
    self
      .store
      .insert(job.id, job.clone())
      .await
      .map_err(Error::store)?;
    Ok(job)
  }
}
