//! Persistent username -> password mapping.
//!
//! All accounts share one `users.json` object. Passwords are stored as
//! plaintext because that is the wire format; hashing is out of scope.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::{read_json, write_json};

pub const USERS_FILE: &str = "users.json";

/// In-memory view of the account mapping, tied to its backing file.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, String>,
}

impl UserStore {
    /// Load the mapping from `users.json` under `dir`, empty if absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(USERS_FILE);
        let users = read_json(&path)?.unwrap_or_default();
        Ok(UserStore { path, users })
    }

    /// Overwrite the backing file with the full mapping.
    pub fn save(&self) -> Result<()> {
        write_json(&self.path, &self.users)
    }

    /// Create an account. The mapping is left unchanged, in memory and on
    /// disk, when registration fails.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if self.users.contains_key(username) {
            return Err(Error::DuplicateUser(username.to_string()));
        }
        self.users
            .insert(username.to_string(), password.to_string());
        if let Err(e) = self.save() {
            self.users.remove(username);
            return Err(e);
        }
        Ok(())
    }

    /// Check credentials byte-for-byte against the stored password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(Error::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_empty_mapping() {
        let dir = tempdir().unwrap();
        let store = UserStore::load(dir.path()).unwrap();
        assert!(matches!(
            store.authenticate("anyone", "pw"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn register_then_authenticate_succeeds() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::load(dir.path()).unwrap();
        store.register("alice", "pw1").unwrap();
        store.authenticate("alice", "pw1").unwrap();
        assert!(matches!(
            store.authenticate("alice", "wrong"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn passwords_are_case_sensitive() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::load(dir.path()).unwrap();
        store.register("alice", "Secret").unwrap();
        assert!(matches!(
            store.authenticate("alice", "secret"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn duplicate_registration_leaves_mapping_unchanged() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::load(dir.path()).unwrap();
        store.register("alice", "pw1").unwrap();
        let err = store.register("alice", "pw2").unwrap_err();
        assert!(matches!(err, Error::DuplicateUser(u) if u == "alice"));

        // The original password still holds, in memory and on disk.
        store.authenticate("alice", "pw1").unwrap();
        let reloaded = UserStore::load(dir.path()).unwrap();
        reloaded.authenticate("alice", "pw1").unwrap();
        assert!(reloaded.authenticate("alice", "pw2").is_err());
    }

    #[test]
    fn mapping_persists_across_loads() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::load(dir.path()).unwrap();
        store.register("alice", "pw1").unwrap();
        store.register("bob", "pw2").unwrap();

        let reloaded = UserStore::load(dir.path()).unwrap();
        reloaded.authenticate("alice", "pw1").unwrap();
        reloaded.authenticate("bob", "pw2").unwrap();
    }

    #[test]
    fn corrupt_users_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(USERS_FILE), "][").unwrap();
        assert!(matches!(
            UserStore::load(dir.path()),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn wire_format_is_a_flat_object() {
        let dir = tempdir().unwrap();
        let mut store = UserStore::load(dir.path()).unwrap();
        store.register("alice", "pw1").unwrap();

        let raw = std::fs::read_to_string(dir.path().join(USERS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["alice"], "pw1");
    }
}
