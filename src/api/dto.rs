//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not the student record
//! itself. Students travel as `storage::Student` / `storage::StudentFields`,
//! whose serde layout is the wire format.

use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "ok" or "error"
    pub storage: String,
    /// Number of stored entries, when storage is reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<usize>,
    pub uptime_seconds: u64,
    /// RFC 3339 start time
    pub started_at: String,
    pub version: String,
}
