//! Student API Client
//!
//! HTTP client for the student collection REST API.

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::storage::{Student, StudentFields};

/// Default collection URL, matching the dashboard's default
pub const DEFAULT_BASE_URL: &str = "http://localhost:8089/api/v1/student";

/// REST client for the student collection
pub struct StudentClient {
    client: Client,
    base_url: String,
}

impl StudentClient {
    /// Create a client for the collection mounted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `{base}/{action}/{id}` with the id as one percent-encoded segment
    fn record_url(&self, action: &str, id: &str) -> String {
        self.url(&format!("{}/{}", action, urlencoding::encode(id)))
    }

    /// GET /getall
    pub async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let response = self.client.get(self.url("getall")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// GET /search/:id
    pub async fn get(&self, id: &str) -> Result<Student, ClientError> {
        let response = self
            .client
            .get(self.record_url("search", id))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST /save
    pub async fn create(&self, fields: &StudentFields) -> Result<Student, ClientError> {
        let response = self.client.post(self.url("save")).json(fields).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// PUT /edit/:id
    pub async fn update(&self, id: &str, fields: &StudentFields) -> Result<Student, ClientError> {
        let response = self
            .client
            .put(self.record_url("edit", id))
            .json(fields)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// DELETE /delete/:id
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.record_url("delete", id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into `ClientError::Api`
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    #[derive(serde::Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let message = response
        .json::<ErrorEnvelope>()
        .await
        .map(|e| e.error.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(ClientError::Api { status, message })
}

/// Errors from the student API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
