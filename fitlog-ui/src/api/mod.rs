//! Student API
//!
//! The views talk to the record service through [`StudentApi`] so the
//! fetch/delete/update flows can run against an in-memory double in tests.

pub mod client;

pub use client::HttpApi;

use thiserror::Error;

use crate::state::model::{Student, StudentFields};

/// Failure of a single API call
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Decode(String),
}

/// Operations the dashboard performs against the student collection
#[allow(async_fn_in_trait)]
pub trait StudentApi {
    /// `GET /getall`
    async fn fetch_all(&self) -> Result<Vec<Student>, ApiError>;

    /// `GET /search/{id}`
    async fn fetch_one(&self, id: &str) -> Result<Student, ApiError>;

    /// `PUT /edit/{id}` with all six fields
    async fn update(&self, id: &str, fields: &StudentFields) -> Result<(), ApiError>;

    /// `DELETE /delete/{id}`
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
