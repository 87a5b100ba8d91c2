//! Configuration loading and environment variable interpolation

use crate::error::Result;
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;

const CONFIG_FILENAME: &str = "taskpad.toml";

/// Load configuration from taskpad.toml, searching upward from the current
/// directory. Falls back to built-in defaults when no file exists, so the
/// client works against localhost with no setup.
pub fn load_config() -> Result<Config> {
    let start = env::current_dir()?;
    match find_config_file(&start) {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from `start`
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // Compile-time constant pattern; a panic here is a bug in the pattern
    // itself, not a runtime condition.
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("invalid env interpolation regex");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Taskpad Configuration

[services]
# Where the user service (login/register) lives
user_url = "${TASKPAD_USER_URL:-http://localhost:8001}"

# Where the todo service lives
todo_url = "${TASKPAD_TODO_URL:-http://localhost:8002}"

# Per-request timeout in seconds
timeout_secs = 30

[session]
# Where the login session is stored
file = "~/.taskpad/session.json"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_interpolation() {
        env::set_var("TASKPAD_TEST_VAR", "hello");
        let content = "value = \"${TASKPAD_TEST_VAR}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"hello\"");
        env::remove_var("TASKPAD_TEST_VAR");
    }

    #[test]
    fn test_env_interpolation_with_default() {
        let content = "value = \"${NONEXISTENT_VAR:-default_value}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"default_value\"");
    }

    #[test]
    fn default_content_parses_to_defaults() {
        let config: Config = toml::from_str(&interpolate_env_vars(default_config_content())).unwrap();
        assert_eq!(config.services.user_url, "http://localhost:8001");
        assert_eq!(config.services.todo_url, "http://localhost:8002");
    }
}
