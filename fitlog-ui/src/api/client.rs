//! HTTP API Client
//!
//! gloo-net implementation of [`StudentApi`].

use gloo_net::http::{Request, Response};

use super::{ApiError, StudentApi};
use crate::state::model::{Student, StudentFields};

/// Default student collection URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8089/api/v1/student";

/// Local storage key holding an override of the collection URL
const API_URL_KEY: &str = "fitlog_api_url";

/// Get the collection URL from local storage, the build environment, or the default
pub fn get_api_base() -> String {
    resolve_api_base(stored_api_base(), option_env!("FITLOG_API_URL"))
}

/// Pick the first non-blank candidate and drop trailing slashes
pub fn resolve_api_base(stored: Option<String>, build_env: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .or_else(|| build_env.filter(|url| !url.trim().is_empty()).map(String::from))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    url.trim().trim_end_matches('/').to_string()
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_URL_KEY).ok()?
}

/// Client bound to one collection URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the URL resolved by [`get_api_base`]
    pub fn from_env() -> Self {
        Self::new(&get_api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// `{base}/{action}/{id}` with the id as one percent-encoded segment
    fn record_url(&self, action: &str, id: &str) -> String {
        self.url(&format!("{}/{}", action, urlencoding::encode(id)))
    }
}

impl StudentApi for HttpApi {
    async fn fetch_all(&self) -> Result<Vec<Student>, ApiError> {
        let response = Request::get(&self.url("getall"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(check(response)?).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Student, ApiError> {
        let response = Request::get(&self.record_url("search", id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(check(response)?).await
    }

    async fn update(&self, id: &str, fields: &StudentFields) -> Result<(), ApiError> {
        let response = Request::put(&self.record_url("edit", id))
            .json(fields)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check(response).map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.record_url("delete", id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check(response).map(|_| ())
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_stored_url() {
        let base = resolve_api_base(
            Some("http://records.local/api/v1/student/".into()),
            Some("http://build.local/api/v1/student"),
        );
        assert_eq!(base, "http://records.local/api/v1/student");
    }

    #[test]
    fn test_resolve_falls_back_to_build_env() {
        let base = resolve_api_base(Some("  ".into()), Some("http://build.local/students//"));
        assert_eq!(base, "http://build.local/students");
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn test_paths_use_id_segment() {
        let api = HttpApi::new("http://localhost:8089/api/v1/student/");
        assert_eq!(api.base(), "http://localhost:8089/api/v1/student");
        assert_eq!(
            api.url("edit/abc123"),
            "http://localhost:8089/api/v1/student/edit/abc123"
        );
    }

    #[test]
    fn test_id_is_a_single_encoded_segment() {
        let api = HttpApi::new("http://localhost:8089/api/v1/student");
        assert_eq!(
            api.record_url("edit", "a/b?c#d"),
            "http://localhost:8089/api/v1/student/edit/a%2Fb%3Fc%23d"
        );
        assert_eq!(
            api.record_url("search", "abc123"),
            "http://localhost:8089/api/v1/student/search/abc123"
        );
    }
}
