//! [`UserDirectory`] — registration and credential checks over a user map.

use uuid::Uuid;

use crate::{
  Error, Result,
  store::StableMap,
  user::{User, UserPayload},
};

/// Owns the user records. Uniqueness of `username` and `email` is enforced
/// by scanning `values()` at insert time; under the one-call-at-a-time
/// execution model the scan-then-insert sequence is effectively atomic.
pub struct UserDirectory<S> {
  store: S,
}

impl<S> UserDirectory<S>
where
  S: StableMap<Uuid, User>,
{
  pub fn new(store: S) -> Self { Self { store } }

  /// Register a new user. Fails with [`Error::DuplicateUser`] if any
  /// existing user already holds the payload's username or email.
  pub async fn register(&self, payload: UserPayload) -> Result<User> {
    let existing = self.store.values().await.map_err(Error::store)?;
    let taken = existing
      .iter()
      .any(|u| u.username == payload.username || u.email == payload.email);
    if taken {
      return Err(Error::DuplicateUser("user already exists.".into()));
    }

    let user = User::new(payload);
    self
      .store
      .insert(user.id, user.clone())
      .await
      .map_err(Error::store)?;
    Ok(user)
  }

  /// Check credentials and return the matched user for the session manager
  /// to adopt. The password comparison is plain string equality — the
  /// modeled system stored plain text (see [`User::password`]).
  pub async fn authenticate(
    &self,
    username: &str,
    password: &str,
  ) -> Result<User> {
    let users = self.store.values().await.map_err(Error::store)?;
    let user = users
      .into_iter()
      .find(|u| u.username == username)
      .ok_or_else(|| {
        Error::AuthenticationError("user does not exist.".into())
      })?;

    if user.password != password {
      return Err(Error::AuthenticationError("incorrect password".into()));
    }
    Ok(user)
  }
}
