//! Job — the posting record owned by the [`JobCatalog`].
//!
//! The mutation helpers live here so the `applies`/`apply_count` invariant
//! and the merge field list are enforced in exactly one place.
//!
//! [`JobCatalog`]: crate::catalog::JobCatalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::User;

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Experience level asked for by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Entry,
  Intermediate,
  Expert,
}

/// Payment arrangement offered by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payment {
  Hourly,
  Monthly,
  Fixed,
}

/// A named skill category; postings carry an ordered list of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub name: String,
}

// ─── Job ─────────────────────────────────────────────────────────────────────

/// A job posting.
///
/// `author_id` is set at creation from the session user and never changes.
/// The `author_*` fields are a denormalised snapshot taken at creation; they
/// are not kept in sync with later user edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
  pub id:           Uuid,
  pub author_id:    Uuid,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   Option<DateTime<Utc>>,
  pub author_name:  String,
  pub author_phone: String,
  pub author_email: String,
  pub title:        String,
  pub description:  String,
  pub price:        i64,
  pub level:        Level,
  pub payment:      Payment,
  pub skills:       Vec<Category>,
  /// Applicant user ids, append-only, no duplicates. The author never
  /// appears here.
  pub applies:      Vec<Uuid>,
  /// Always equals `applies.len()`.
  pub apply_count:  u64,
  /// Defaults to 0; no operation mutates it.
  pub bookmark:     i64,
}

/// Caller input for create and update. The update merge overwrites exactly
/// these six fields and never touches any other `Job` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
  pub title:       String,
  pub description: String,
  pub price:       i64,
  pub level:       Level,
  pub payment:     Payment,
  pub skills:      Vec<Category>,
}

impl Job {
  /// Build a new posting for `author`, stamping a fresh random id and the
  /// creation time. Workflow fields start zero/empty.
  pub fn new(author: &User, payload: JobPayload) -> Self {
    Self {
      id:           Uuid::new_v4(),
      author_id:    author.id,
      created_at:   Utc::now(),
      updated_at:   None,
      author_name:  author.name.clone(),
      author_phone: author.phone.clone(),
      author_email: author.email.clone(),
      title:        payload.title,
      description:  payload.description,
      price:        payload.price,
      level:        payload.level,
      payment:      payload.payment,
      skills:       payload.skills,
      applies:      Vec::new(),
      apply_count:  0,
      bookmark:     0,
    }
  }

  /// Overwrite the payload-carried fields and stamp `updated_at`.
  /// `author_id`, timestamps, the author snapshot, and the workflow fields
  /// are untouched.
  pub fn merge(&mut self, payload: JobPayload) {
    self.title = payload.title;
    self.description = payload.description;
    self.price = payload.price;
    self.level = payload.level;
    self.payment = payload.payment;
    self.skills = payload.skills;
    self.updated_at = Some(Utc::now());
  }

  /// Append `applicant_id` to `applies`, keeping `apply_count` equal to
  /// `applies.len()`, and stamp `updated_at`.
  ///
  /// Callers must have already rejected the author and duplicate
  /// applicants; this helper only records.
  pub fn record_apply(&mut self, applicant_id: Uuid) {
    self.applies.push(applicant_id);
    self.apply_count = self.applies.len() as u64;
    self.updated_at = Some(Utc::now());
  }
}
