//! Scenario tests for the board against an in-memory `StableMap` double.

use std::{
  collections::BTreeMap,
  convert::Infallible,
  sync::{Arc, Mutex},
};

use uuid::Uuid;

use crate::{
  Error,
  board::JobBoard,
  job::{Category, Job, JobPayload, Level, Payment},
  store::{MapKey, StableMap},
  user::{User, UserPayload},
};

// ─── In-memory double ────────────────────────────────────────────────────────

/// `BTreeMap` behind a mutex: ordered values, upsert-returning-previous,
/// infallible.
struct MemMap<K, V> {
  inner: Arc<Mutex<BTreeMap<K, V>>>,
}

impl<K, V> Default for MemMap<K, V> {
  fn default() -> Self {
    Self {
      inner: Arc::new(Mutex::new(BTreeMap::new())),
    }
  }
}

impl<K, V> StableMap<K, V> for MemMap<K, V>
where
  K: MapKey,
  V: Clone + Send + Sync + 'static,
{
  type Error = Infallible;

  async fn get(&self, key: K) -> Result<Option<V>, Infallible> {
    Ok(self.inner.lock().unwrap().get(&key).cloned())
  }

  async fn insert(&self, key: K, value: V) -> Result<Option<V>, Infallible> {
    Ok(self.inner.lock().unwrap().insert(key, value))
  }

  async fn remove(&self, key: K) -> Result<Option<V>, Infallible> {
    Ok(self.inner.lock().unwrap().remove(&key))
  }

  async fn values(&self) -> Result<Vec<V>, Infallible> {
    Ok(self.inner.lock().unwrap().values().cloned().collect())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

type TestBoard = JobBoard<MemMap<Uuid, User>, MemMap<Uuid, Job>>;

fn board() -> TestBoard {
  JobBoard::new(MemMap::default(), MemMap::default())
}

fn user_payload(username: &str, email: &str) -> UserPayload {
  UserPayload {
    name:     format!("{username} tester"),
    username: username.to_owned(),
    email:    email.to_owned(),
    phone:    "555-0100".into(),
    password: format!("{username}-pw"),
  }
}

fn job_payload(title: &str) -> JobPayload {
  JobPayload {
    title:       title.to_owned(),
    description: "do the thing".into(),
    price:       100,
    level:       Level::Entry,
    payment:     Payment::Hourly,
    skills:      vec![
      Category { name: "rust".into() },
      Category { name: "sql".into() },
    ],
  }
}

/// Register and log in `username` in one step.
async fn login_fresh(board: &mut TestBoard, username: &str) -> User {
  let user = board
    .register_user(user_payload(username, &format!("{username}@x.com")))
    .await
    .unwrap();
  board
    .login_user(username, &format!("{username}-pw"))
    .await
    .unwrap();
  user
}

// ─── Registration ────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_username_rejected() {
  let board = board();
  board
    .register_user(user_payload("alice", "a@x.com"))
    .await
    .unwrap();

  // Same username, different email.
  let err = board
    .register_user(user_payload("alice", "other@x.com"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateUser(m) if m == "user already exists."));
}

#[tokio::test]
async fn duplicate_email_rejected() {
  let board = board();
  board
    .register_user(user_payload("alice", "a@x.com"))
    .await
    .unwrap();

  // Different username, same email.
  let mut payload = user_payload("bob", "b@x.com");
  payload.email = "a@x.com".into();
  let err = board.register_user(payload).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateUser(_)));
}

#[tokio::test]
async fn disjoint_registration_succeeds() {
  let mut board = board();
  board
    .register_user(user_payload("alice", "a@x.com"))
    .await
    .unwrap();
  let bob = board
    .register_user(user_payload("bob", "b@x.com"))
    .await
    .unwrap();

  assert_eq!(bob.username, "bob");
  assert!(bob.updated_at.is_none());

  // The stored record is retrievable through login.
  board.login_user("bob", "bob-pw").await.unwrap();
  assert_eq!(board.current_user().unwrap(), "bob");
}

// ─── Login / logout ──────────────────────────────────────────────────────────

#[tokio::test]
async fn login_unknown_username_errors() {
  let mut board = board();
  let err = board.login_user("nobody", "pw").await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "user does not exist."));
}

#[tokio::test]
async fn login_wrong_password_errors() {
  let mut board = board();
  board
    .register_user(user_payload("alice", "a@x.com"))
    .await
    .unwrap();

  let err = board.login_user("alice", "wrong").await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "incorrect password"));
}

#[tokio::test]
async fn login_success_reports_username() {
  let mut board = board();
  board
    .register_user(user_payload("alice", "a@x.com"))
    .await
    .unwrap();

  let message = board.login_user("alice", "alice-pw").await.unwrap();
  assert_eq!(message, "Logged in as alice");
  assert_eq!(board.current_user().unwrap(), "alice");
}

#[tokio::test]
async fn logout_before_login_errors() {
  let mut board = board();
  let err = board.log_out().unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "no logged in user"));
}

#[tokio::test]
async fn logout_clears_session() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;

  assert_eq!(board.log_out().unwrap(), "Logged out successfully.");
  let err = board.current_user().unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "no logged in user."));
}

// ─── Job ownership ───────────────────────────────────────────────────────────

#[tokio::test]
async fn non_owner_cannot_update_or_delete() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  // Switch sessions to bob.
  login_fresh(&mut board, "bob").await;

  let err = board
    .update_job(job.id, job_payload("Hijacked"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "you are not this job owner."));

  let err = board.delete_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(_)));
}

#[tokio::test]
async fn owner_can_update_and_delete() {
  let mut board = board();
  let alice = login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let updated = board
    .update_job(job.id, job_payload("Build API v2"))
    .await
    .unwrap();
  assert_eq!(updated.title, "Build API v2");
  assert_eq!(updated.author_id, alice.id);

  let removed = board.delete_job(job.id).await.unwrap();
  assert_eq!(removed.id, job.id);
  assert!(matches!(
    board.get_job(job.id).await,
    Err(Error::NotFound(_))
  ));
}

#[tokio::test]
async fn update_preserves_immutable_fields() {
  let mut board = board();
  let alice = login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let updated = board
    .update_job(job.id, job_payload("Renamed"))
    .await
    .unwrap();
  assert_eq!(updated.id, job.id);
  assert_eq!(updated.author_id, alice.id);
  assert_eq!(updated.created_at, job.created_at);
  assert_eq!(updated.author_email, alice.email);
  assert_eq!(updated.apply_count, 0);
}

// ─── Apply workflow ──────────────────────────────────────────────────────────

#[tokio::test]
async fn author_cannot_apply_to_own_job() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let err = board.apply_to_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "can't apply to your own job"));
}

#[tokio::test]
async fn duplicate_apply_rejected() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let bob = login_fresh(&mut board, "bob").await;
  let applied = board.apply_to_job(job.id).await.unwrap();
  assert_eq!(applied.applies, vec![bob.id]);
  assert_eq!(applied.apply_count, 1);

  let err = board.apply_to_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateUser(m) if m == "you already applied to this job."));
}

#[tokio::test]
async fn apply_count_tracks_distinct_applicants() {
  let mut board = board();
  login_fresh(&mut board, "author").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let applicants = ["bob", "carol", "dave"];
  for name in applicants {
    login_fresh(&mut board, name).await;
    board.apply_to_job(job.id).await.unwrap();
  }

  let job = board.get_job(job.id).await.unwrap();
  assert_eq!(job.apply_count, applicants.len() as u64);
  assert_eq!(job.applies.len(), applicants.len());

  let mut seen = job.applies.clone();
  seen.sort();
  seen.dedup();
  assert_eq!(seen.len(), applicants.len());
}

#[tokio::test]
async fn apply_requires_session() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();
  board.log_out().unwrap();

  let err = board.apply_to_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(m) if m == "you need to login first."));
}

// ─── Round-trip ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_round_trips_payload() {
  let mut board = board();
  let alice = login_fresh(&mut board, "alice").await;
  let payload = job_payload("Build API");

  let created = board.create_job(payload.clone()).await.unwrap();
  let fetched = board.get_job(created.id).await.unwrap();

  assert_eq!(fetched.title, payload.title);
  assert_eq!(fetched.description, payload.description);
  assert_eq!(fetched.price, payload.price);
  assert_eq!(fetched.level, payload.level);
  assert_eq!(fetched.payment, payload.payment);
  assert_eq!(fetched.skills, payload.skills);
  assert_eq!(fetched.author_id, alice.id);
  assert!(fetched.updated_at.is_none());
}

#[tokio::test]
async fn update_stamps_updated_at_after_created_at() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  let job = board.create_job(job_payload("Build API")).await.unwrap();

  let updated = board
    .update_job(job.id, job_payload("Build API v2"))
    .await
    .unwrap();
  let stamp = updated.updated_at.expect("updated_at set by update");
  assert!(stamp > updated.created_at);
}

#[tokio::test]
async fn list_returns_all_jobs() {
  let mut board = board();
  login_fresh(&mut board, "alice").await;
  board.create_job(job_payload("first")).await.unwrap();
  board.create_job(job_payload("second")).await.unwrap();

  let all = board.list_jobs().await.unwrap();
  assert_eq!(all.len(), 2);
}

// ─── Worked example ──────────────────────────────────────────────────────────

#[tokio::test]
async fn full_scenario() {
  let mut board = board();

  let alice = board
    .register_user(UserPayload {
      name:     "Alice".into(),
      username: "alice".into(),
      email:    "a@x.com".into(),
      phone:    "555-0100".into(),
      password: "p1".into(),
    })
    .await
    .unwrap();

  board.login_user("alice", "p1").await.unwrap();

  let job = board.create_job(job_payload("Build API")).await.unwrap();
  assert_eq!(job.author_id, alice.id);
  assert_eq!(job.bookmark, 0);
  assert_eq!(job.apply_count, 0);

  // Deleting while logged out is an authentication error.
  board.log_out().unwrap();
  let err = board.delete_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::AuthenticationError(_)));

  // Re-login, delete, and confirm the posting is gone.
  board.login_user("alice", "p1").await.unwrap();
  board.delete_job(job.id).await.unwrap();
  let err = board.get_job(job.id).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(m) if m == format!("cannot find job with {} id", job.id)));
}
