//! Authentication and session management

pub mod models;
pub mod session;

pub use models::{AuthForm, User};
pub use session::{Session, SessionStore};

use crate::api::UserClient;
use crate::error::{Error, Result};

/// Log in against the user service and persist the resulting session.
///
/// The service only returns a token, so the stored profile is synthesized
/// from the username.
pub async fn login(
    users: &UserClient,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Session> {
    let token = users.login(username, password).await?;
    let session = store.login(token, User::synthesized(username))?;
    tracing::info!(%username, "logged in");
    Ok(session)
}

/// User-facing message for a failed login.
pub fn login_error_message(err: &Error) -> String {
    match err {
        Error::Api {
            detail: Some(detail),
            ..
        } => detail.clone(),
        Error::Http(_) => "Network error. Please try again.".to_string(),
        _ => "Login failed. Please check your credentials.".to_string(),
    }
}

/// User-facing message for a failed registration.
pub fn register_error_message(err: &Error) -> String {
    match err {
        Error::Conflict => "Username or email already exists. Please try another.".to_string(),
        Error::Api {
            detail: Some(detail),
            ..
        } => detail.clone(),
        Error::Http(_) => "Network error. Please try again.".to_string(),
        _ => "Registration failed. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_message_prefers_server_detail() {
        let err = Error::Api {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(login_error_message(&err), "Invalid credentials");
    }

    #[test]
    fn login_message_falls_back_without_detail() {
        let err = Error::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(
            login_error_message(&err),
            "Login failed. Please check your credentials."
        );
    }

    #[test]
    fn register_message_names_duplicate_accounts() {
        assert_eq!(
            register_error_message(&Error::Conflict),
            "Username or email already exists. Please try another."
        );
    }
}
