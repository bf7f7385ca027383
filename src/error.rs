//! Error types for taskbook.
//!
//! Every variant is surfaced to the user as a modal notice in the TUI.
//! Only `Parse` is fatal: the store file itself is unreadable, so the
//! session ends once the notice is dismissed.

use std::path::PathBuf;

use thiserror::Error;

use crate::nav::Screen;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store file {} is corrupt: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("user '{0}' already exists")]
    DuplicateUser(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("no task with id {0}")]
    UnknownTask(u64),

    #[error("select a task first")]
    NoSelection,

    #[error("no user is logged in")]
    NoSession,

    #[error("cannot navigate from {from} to {to}")]
    Navigation { from: Screen, to: Screen },
}

impl Error {
    /// Whether the session should end once the user dismisses the notice.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
