//! Persisted login state. The session holds only public user metadata; the
//! storage medium is behind [`SessionStore`] so the auth state never touches
//! files directly.

use crate::features::users::types::User;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub is_logged_in: bool,
}

impl Session {
    #[must_use]
    pub fn logged_in(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_logged_in: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait SessionStore {
    /// Reads the stored session. `Ok(None)` when nothing was stored.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be read or holds invalid data.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// # Errors
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Removes the stored session; clearing an empty store is not an error.
    ///
    /// # Errors
    /// Returns an error if existing data cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Stores the session as a JSON document on disk.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(session)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Keeps the session in memory only, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user1() -> User {
        User {
            id: 1,
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            image: None,
        }
    }

    #[test]
    fn session_serializes_with_camel_case_keys() {
        let session = Session::logged_in(&user1());
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "username": "user1",
                "email": "user1@mail.com",
                "isLoggedIn": true
            })
        );
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("auth.json"));

        assert_eq!(store.load().unwrap(), None);

        let session = Session::logged_in(&user1());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn file_store_save_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = FileSessionStore::new(blocker.join("auth.json"));
        assert!(matches!(
            store.save(&Session::logged_in(&user1())),
            Err(SessionError::Io(_))
        ));
    }

    #[test]
    fn file_store_reports_corrupt_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(matches!(store.load(), Err(SessionError::Json(_))));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySessionStore::default();
        let session = Session::logged_in(&user1());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
