//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub services: ServicesConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the user service (login/register)
    #[serde(default = "default_user_url")]
    pub user_url: String,

    /// Base URL of the todo service
    #[serde(default = "default_todo_url")]
    pub todo_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_todo_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            user_url: default_user_url(),
            todo_url: default_todo_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the session file. A leading `~` expands to the home
    /// directory.
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    PathBuf::from("~/.taskpad/session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

impl SessionConfig {
    /// Session file path with `~` expanded.
    pub fn resolved_file(&self) -> PathBuf {
        expand_home(&self.file)
    }
}

fn expand_home(path: &PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.clone();
    };
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost_services() {
        let config = Config::default();
        assert_eq!(config.services.user_url, "http://localhost:8001");
        assert_eq!(config.services.todo_url, "http://localhost:8002");
        assert_eq!(config.services.timeout_secs, 30);
    }

    #[test]
    fn session_file_expands_home() {
        env::set_var("HOME", "/home/tester");
        let session = SessionConfig::default();
        assert_eq!(
            session.resolved_file(),
            PathBuf::from("/home/tester/.taskpad/session.json")
        );
    }

    #[test]
    fn absolute_session_file_is_untouched() {
        let session = SessionConfig {
            file: PathBuf::from("/tmp/session.json"),
        };
        assert_eq!(session.resolved_file(), PathBuf::from("/tmp/session.json"));
    }
}
