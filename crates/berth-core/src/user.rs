//! User — the identity record owned by the [`UserDirectory`].
//!
//! [`UserDirectory`]: crate::directory::UserDirectory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Registration is write-once: no update or delete
/// operation exists for users, so `updated_at` stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id:         Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: Option<DateTime<Utc>>,
  pub name:       String,
  pub username:   String,
  pub email:      String,
  pub phone:      String,
  /// Stored and compared in plain text, exactly as the modeled system did.
  /// TODO: replace with an argon2 PHC hash and `verify_password` once the
  /// stored-credential format is allowed to change.
  pub password:   String,
}

/// Registration input. `id` and `created_at` are never accepted from
/// callers; the directory assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
  pub name:     String,
  pub username: String,
  pub email:    String,
  pub phone:    String,
  pub password: String,
}

impl User {
  /// Build a new user from a registration payload, stamping identity and
  /// creation time.
  pub fn new(payload: UserPayload) -> Self {
    Self {
      id:         Uuid::new_v4(),
      created_at: Utc::now(),
      updated_at: None,
      name:       payload.name,
      username:   payload.username,
      email:      payload.email,
      phone:      payload.phone,
      password:   payload.password,
    }
  }
}
