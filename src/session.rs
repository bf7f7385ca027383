//! The authenticated-user slot.

use crate::error::{Error, Result};

/// Runtime association between the app and the logged-in user.
///
/// Task operations must go through [`Session::current_user`], which makes
/// "no active session" a checked precondition rather than an implicit
/// global that silently goes stale.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session { user: None }
    }

    /// Record a successful authentication.
    pub fn log_in(&mut self, username: &str) {
        self.user = Some(username.to_string());
    }

    /// Clear the slot on the logout transition.
    pub fn log_out(&mut self) {
        self.user = None;
    }

    /// The active username, or `NoSession` when nobody is logged in.
    pub fn current_user(&self) -> Result<&str> {
        self.user.as_deref().ok_or(Error::NoSession)
    }

    pub fn is_active(&self) -> bool {
        self.user.is_some()
    }
}
