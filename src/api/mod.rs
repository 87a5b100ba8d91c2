//! HTTP clients for the user and todo services

mod models;
pub mod todos;
pub mod users;

pub use models::*;
pub use todos::TodoClient;
pub use users::UserClient;

use std::time::Duration;

use crate::error::{Error, Result};

/// Build the reqwest client shared by both service clients.
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Turn a non-2xx response into an `Error::Api`, pulling the server's
/// `detail` message out of the body when the shape matches.
pub(crate) async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let detail = response
        .json::<ApiDetail>()
        .await
        .ok()
        .map(|body| body.detail);
    Error::Api { status, detail }
}

/// Query a service's `/health` endpoint.
///
/// Used by `taskpad doctor` to verify connectivity before blaming
/// credentials or configuration.
pub async fn check_health(base_url: &str) -> Result<ServiceHealth> {
    let client = http_client(5)?;
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    tracing::debug!(%url, "health check");

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<ServiceHealth>().await?)
}
