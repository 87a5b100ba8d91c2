//! Client for the user service (login and registration)

use crate::api::{self, LoginRequest, RegisterRequest, TokenResponse};
use crate::error::{Error, Result};

/// HTTP client for the user service.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: api::http_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, %username, "login request");

        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(api::api_error(response).await);
        }

        let token = response.json::<TokenResponse>().await?;
        Ok(token.access_token)
    }

    /// Create a new account. A 409 from the service means the username or
    /// email is already taken.
    pub async fn register(&self, form: &RegisterRequest) -> Result<()> {
        let url = format!("{}/register", self.base_url);
        tracing::debug!(%url, username = %form.username, "register request");

        let response = self.client.post(&url).json(form).send().await?;

        match response.status().as_u16() {
            s if (200..300).contains(&s) => Ok(()),
            409 => Err(Error::Conflict),
            _ => Err(api::api_error(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = UserClient::new("http://localhost:8001/", 5).unwrap();
        assert_eq!(client.base_url, "http://localhost:8001");
    }
}
