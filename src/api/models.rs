//! Wire types for the user and todo services

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the todo service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
    /// Server-assigned creation timestamp, kept as the raw string the
    /// service emits.
    pub created_at: String,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload. Omitted fields are left unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Update that only flips the completed flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Login credentials sent to the user service.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration form sent to the user service.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login response. The service also sends a `token_type` field
/// which this client ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body shape the services use for 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDetail {
    pub detail: String,
}

/// Response of the `/health` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
}
