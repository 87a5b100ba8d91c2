//! Session persistence

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::auth::models::User;
use crate::error::Result;

/// Authenticated session: access token plus the user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }
}

/// On-disk shape of the session file. Both fields are optional so a partial
/// file can be read without erroring; a session is only restored when both
/// are present.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
    user: Option<User>,
}

/// File-backed session store.
///
/// The file plays the role the original client gave to browser local
/// storage: a `token` string and a JSON-serialized `user`, written on login
/// and removed on logout.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Restore a persisted session, if the file exists and holds both the
    /// token and the user. An unreadable or partial file restores nothing.
    pub fn restore(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path).ok()?;
        let file: SessionFile = match serde_json::from_str(&content) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                return None;
            }
        };
        match (file.token, file.user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        }
    }

    /// Persist a new session and return it.
    pub fn login(&self, token: String, user: User) -> Result<Session> {
        let session = Session::new(token, user);
        let file = SessionFile {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(session)
    }

    /// Clear the persisted session. Removing an already-absent file is not
    /// an error.
    pub fn logout(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn login_then_restore_roundtrips() {
        let (_dir, store) = store();
        store
            .login("tok-123".to_string(), User::synthesized("alice"))
            .unwrap();

        let restored = store.restore().unwrap();
        assert_eq!(restored.token, "tok-123");
        assert_eq!(restored.user.username, "alice");
    }

    #[test]
    fn restore_without_file_is_none() {
        let (_dir, store) = store();
        assert!(store.restore().is_none());
    }

    #[test]
    fn restore_with_missing_user_is_none() {
        let (_dir, store) = store();
        fs::write(store.path(), r#"{"token":"tok-123"}"#).unwrap();
        assert!(store.restore().is_none());
    }

    #[test]
    fn restore_with_corrupt_file_is_none() {
        let (_dir, store) = store();
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.restore().is_none());
    }

    #[test]
    fn logout_removes_file() {
        let (_dir, store) = store();
        store
            .login("tok".to_string(), User::synthesized("bob"))
            .unwrap();
        store.logout().unwrap();
        assert!(store.restore().is_none());
        // A second logout is a no-op.
        store.logout().unwrap();
    }
}
