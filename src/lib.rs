//! # fitlog
//!
//! Record store behind the fitlog dashboard: a small REST service holding
//! fitness log entries (pushups, distance run, weight lifted) plus an
//! operator CLI that talks to it.
//!
//! ## Modules
//!
//! - [`storage`]: SQLite-backed student collection
//! - [`api`]: REST API server with Axum
//! - [`client`]: HTTP client for the REST API (used by the CLI)
//! - [`config`]: TOML + environment configuration
//! - [`import`]: CSV import of entries
//! - [`logging`]: tracing subscriber setup
//!
//! The dashboard itself lives in the `fitlog-ui` crate and only talks to
//! this service over HTTP.

pub mod api;
pub mod client;
pub mod config;
pub mod import;
pub mod logging;
pub mod storage;

pub use storage::{
    FieldError, RecordStore, Status, StorageError, StorageResult, Student, StudentFields,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use client::{ClientError, StudentClient};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
