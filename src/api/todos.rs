//! Client for the todo service (bearer-authenticated CRUD)

use crate::api::{self, CreateTodo, Todo, UpdateTodo};
use crate::error::{Error, Result};

/// HTTP client for the todo service. Every request carries the session's
/// bearer token.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TodoClient {
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: api::http_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Fetch the authenticated user's todos, newest first.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let url = format!("{}/todos", self.base_url);
        tracing::debug!(%url, "list todos");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        self.expect_success(response, "list").await?.json().await.map_err(Error::from)
    }

    pub async fn create(&self, input: &CreateTodo) -> Result<Todo> {
        let url = format!("{}/todos", self.base_url);
        tracing::debug!(%url, title = %input.title, "create todo");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        self.expect_success(response, "create").await?.json().await.map_err(Error::from)
    }

    /// Partial update; the server returns the full updated todo.
    pub async fn update(&self, id: i64, input: &UpdateTodo) -> Result<Todo> {
        let url = format!("{}/todos/{}", self.base_url, id);
        tracing::debug!(%url, "update todo");

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        self.expect_success(response, "update").await?.json().await.map_err(Error::from)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/todos/{}", self.base_url, id);
        tracing::debug!(%url, "delete todo");

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        self.expect_success(response, "delete").await?;
        Ok(())
    }

    /// Map error statuses, with 401 pulled out so callers can suggest a
    /// fresh login instead of echoing a raw status code.
    async fn expect_success(
        &self,
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response> {
        match response.status().as_u16() {
            s if (200..300).contains(&s) => Ok(response),
            401 => {
                tracing::warn!(operation, "todo service rejected token");
                Err(Error::Unauthorized)
            }
            _ => Err(api::api_error(response).await),
        }
    }
}
