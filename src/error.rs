//! Error types for taskpad

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server rejected the request with a non-2xx status. `detail`
    /// carries the server-provided message from the response body, when one
    /// was present.
    #[error("{}", detail.as_deref().unwrap_or("Request failed"))]
    Api { status: u16, detail: Option<String> },

    #[error("Username or email already exists")]
    Conflict,

    #[error("Session is invalid or expired. Run 'taskpad login' to sign in again.")]
    Unauthorized,

    #[error("Not logged in. Run 'taskpad login' first.")]
    NotLoggedIn,

    #[error("Todo title cannot be empty")]
    EmptyTitle,

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
