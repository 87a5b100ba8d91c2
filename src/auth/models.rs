//! Authentication models

use serde::{Deserialize, Serialize};

/// User profile attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    /// Profile synthesized client-side after login. The user service only
    /// returns a token, so the id is fixed at 1 and the email is derived
    /// from the username.
    pub fn synthesized(username: &str) -> Self {
        Self {
            id: 1,
            username: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }
}

/// Transient input buffer for the login/register screen. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
