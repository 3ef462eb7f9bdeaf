//! [`SessionManager`] — the process-wide single-slot session.
//!
//! The modeled system held the logged-in user in a module-level mutable
//! variable; here the slot is explicit state with a transition API. Exactly
//! one session exists process-wide: a new login overwrites the previous one
//! rather than stacking.

use crate::{Error, Result, user::User};

/// Two states: logged out (initial) or logged in with a user snapshot.
/// The snapshot is a clone taken at login, not a live reference.
#[derive(Default)]
pub struct SessionManager {
  current: Option<User>,
}

impl SessionManager {
  /// Adopt `user` as the current session, replacing any existing one.
  pub fn login(&mut self, user: User) { self.current = Some(user); }

  /// Clear the session. Fails if no one is logged in.
  pub fn logout(&mut self) -> Result<()> {
    if self.current.take().is_none() {
      return Err(Error::AuthenticationError("no logged in user".into()));
    }
    Ok(())
  }

  /// Read-only peek at the session user. Fails if logged out.
  pub fn current(&self) -> Result<&User> {
    self
      .current
      .as_ref()
      .ok_or_else(|| Error::AuthenticationError("no logged in user.".into()))
  }

  /// The session user, if any. Used by callers that supply their own
  /// logged-out error message.
  pub fn user(&self) -> Option<&User> { self.current.as_ref() }
}
