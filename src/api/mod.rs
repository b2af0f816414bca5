//! fitlog REST API
//!
//! HTTP API for the student collection, built with Axum.
//!
//! # Endpoints
//!
//! ## Students (under `ApiConfig::base_path`, default `/api/v1/student`)
//! - `GET /getall` - List all entries
//! - `GET /search/:id` - Get an entry
//! - `POST /save` - Create an entry
//! - `PUT /edit/:id` - Replace an entry's six fields
//! - `DELETE /delete/:id` - Delete an entry
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use fitlog::api::{serve, AppState};
//! use fitlog::config::ApiConfig;
//! use fitlog::storage::{RecordStore, StorageConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(RecordStore::open(&StorageConfig::default())?);
//!     let state = AppState::new(store, ApiConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let student_routes = Router::new()
        .route("/getall", get(routes::students::list_students))
        .route("/search/:id", get(routes::students::get_student))
        .route("/save", post(routes::students::create_student))
        .route("/edit/:id", put(routes::students::update_student))
        .route("/delete/:id", delete(routes::students::delete_student));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let base_path = state.config.base_path.clone();

    let shared_state = Arc::new(state);

    Router::new()
        .nest(&base_path, student_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive CORS unless specific origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("fitlog API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("fitlog API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::storage::{RecordStore, Student, StudentFields};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<RecordStore>) {
        let store = Arc::new(RecordStore::open_in_memory().unwrap());
        let state = AppState::new(Arc::clone(&store), ApiConfig::default());
        (build_router(state), store)
    }

    fn seed(store: &RecordStore, date: &str, pushups: &str) -> Student {
        store
            .insert(
                StudentFields::default()
                    .name(date)
                    .address("gym")
                    .status("Healthy")
                    .exercise(pushups, "5", "60"),
            )
            .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _store) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _store) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_getall_returns_insertion_order() {
        let (app, store) = create_test_app();
        seed(&store, "2024-01-02", "10");
        seed(&store, "2024-01-01", "20");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/student/getall")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let students: Vec<serde_json::Value> = json_body(response).await;
        assert_eq!(students.len(), 2);
        assert_eq!(students[0]["studentname"], "2024-01-02");
        assert_eq!(students[1]["noofpushups"], "20");
        assert!(students[0]["_id"].is_string());
    }

    #[tokio::test]
    async fn test_search_by_id() {
        let (app, store) = create_test_app();
        let created = seed(&store, "2024-01-01", "20");

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/student/search/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let student: Student = json_body(response).await;
        assert_eq!(student, created);
    }

    #[tokio::test]
    async fn test_search_unknown_id() {
        let (app, _store) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/student/search/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_edit_replaces_all_fields() {
        let (app, store) = create_test_app();
        let created = seed(&store, "2024-01-01", "20");

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/v1/student/edit/{}", created.id))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"studentname": "2024-01-01", "studentaddress": "gym", "status": "Healthy",
                            "noofpushups": "25", "randistance": "5", "weightlifted": "60"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Student = json_body(response).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.pushups, "25");
        assert_eq!(store.get(&created.id).unwrap().fields.pushups, "25");
        assert_eq!(store.get(&created.id).unwrap().fields.student_address, "gym");
    }

    #[tokio::test]
    async fn test_edit_rejects_invalid_status() {
        let (app, store) = create_test_app();
        let created = seed(&store, "2024-01-01", "20");

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/v1/student/edit/{}", created.id))
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"status": "Sick"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.get(&created.id).unwrap().fields.status, "Healthy");
    }

    #[tokio::test]
    async fn test_edit_unknown_id() {
        let (app, _store) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/student/edit/nope")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"studentname": "2024-01-01"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete() {
        let (app, store) = create_test_app();
        let created = seed(&store, "2024-01-01", "20");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/student/delete/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.count().unwrap(), 0);

        let again = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/student/delete/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_creates_student() {
        let (app, store) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/student/save")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"studentname": "2024-03-01", "status": "Unwell", "noofpushups": "5"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Student = json_body(response).await;
        assert_eq!(store.get(&created.id).unwrap().fields.status, "Unwell");
    }

    async fn save_raw(app: Router, content_type: &str, body: &'static str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/student/save")
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_invalid_json() {
        let (app, _store) = create_test_app();

        let response = save_raw(app, "application/json", "not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_save_rejected_bodies_use_error_envelope() {
        let cases = [
            ("text/plain", r#"{"studentname": "2024-01-01"}"#),
            ("application/json", r#"{"noofpushups": 20}"#),
        ];

        for (content_type, raw) in cases {
            let (app, store) = create_test_app();
            let response = save_raw(app, content_type, raw).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", raw);
            let body: serde_json::Value = json_body(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(store.count().unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_save_rejects_non_numeric_measurement() {
        let (app, store) = create_test_app();

        let response = save_raw(app, "application/json", r#"{"noofpushups": "twenty"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(
            body["error"]["message"],
            "Validation error: noofpushups must be a number, got 'twenty'"
        );
        assert_eq!(store.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_decodes_percent_encoded_id() {
        let (app, _store) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/student/search/a%2Fb%3Fc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["error"]["message"], "Storage error: Student not found: a/b?c");
    }

    #[tokio::test]
    async fn test_custom_base_path() {
        let store = Arc::new(RecordStore::open_in_memory().unwrap());
        seed(&store, "2024-01-01", "20");
        let config = ApiConfig {
            base_path: "/students".to_string(),
            ..ApiConfig::default()
        };
        let app = build_router(AppState::new(store, config));

        let response = app
            .oneshot(Request::builder().uri("/students/getall").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
