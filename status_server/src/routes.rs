use std::time::Instant;

use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use status_core::{HostSnapshot, ServerConfig};

use crate::page;

pub const APPLICATION: &str = "Status Server Web App";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared across handlers but immutable after startup: the monotonic process
/// clock and the deployment label. Everything else is recomputed per request.
#[derive(Clone)]
pub struct AppState {
    start_time: Instant,
    environment: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            start_time: Instant::now(),
            environment: config.environment.clone(),
        }
    }

    fn snapshot(&self) -> HostSnapshot {
        HostSnapshot::capture(self.start_time.elapsed())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub hostname: String,
}

impl HealthResponse {
    pub fn healthy(snapshot: &HostSnapshot) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime: snapshot.uptime_seconds,
            hostname: snapshot.hostname.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub application: String,
    pub version: String,
    pub environment: String,
    pub hostname: String,
    pub platform: String,
    #[serde(rename = "nodeVersion")]
    pub node_version: String,
    pub uptime: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health_check))
        .route("/api/info", get(app_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn status_page(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.snapshot()))
}

/// Liveness probe. Asserts only that the process accepts connections and can
/// read its own metadata; no dependent systems are checked.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&state.snapshot()))
}

async fn app_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let snapshot = state.snapshot();
    Json(InfoResponse {
        application: APPLICATION.to_string(),
        version: VERSION.to_string(),
        environment: state.environment.clone(),
        hostname: snapshot.hostname,
        platform: snapshot.platform,
        node_version: snapshot.runtime_version,
        uptime: snapshot.uptime_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState::new(&ServerConfig::default()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_always_healthy() {
        let (status, body) = get_json(test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["uptime"].as_u64().is_some());
        assert!(body["hostname"].as_str().is_some());
        assert!(body["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_info_reports_defaults() {
        let (status, body) = get_json(test_app(), "/api/info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["application"], APPLICATION);
        assert_eq!(body["version"], VERSION);
        assert_eq!(body["environment"], "development");
        assert_eq!(body["platform"], std::env::consts::OS);
        assert!(body["nodeVersion"].as_str().unwrap().starts_with("rust"));
        assert!(body["uptime"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_info_reflects_configured_environment() {
        let config = ServerConfig {
            environment: "production".to_string(),
            ..ServerConfig::default()
        };
        let app = router(AppState::new(&config));
        let (_, body) = get_json(app, "/api/info").await;
        assert_eq!(body["environment"], "production");
    }

    #[tokio::test]
    async fn test_hostname_consistent_across_endpoints() {
        let app = test_app();
        let (_, health) = get_json(app.clone(), "/health").await;
        let (_, info) = get_json(app, "/api/info").await;
        assert_eq!(health["hostname"], info["hostname"]);
    }

    #[tokio::test]
    async fn test_uptime_is_monotonic() {
        let app = test_app();
        let (_, first) = get_json(app.clone(), "/api/info").await;
        let (_, second) = get_json(app, "/api/info").await;
        assert!(second["uptime"].as_u64().unwrap() >= first["uptime"].as_u64().unwrap());
    }

    #[tokio::test]
    async fn test_status_page_serves_html() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Application Running Successfully"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_concurrent_health_checks() {
        let app = test_app();
        let mut handles = Vec::new();
        for _ in 0..100 {
            let app = app.clone();
            handles.push(tokio::spawn(
                async move { get_json(app, "/health").await },
            ));
        }

        let mut hostnames = Vec::new();
        for handle in handles {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "healthy");
            hostnames.push(body["hostname"].as_str().unwrap().to_string());
        }
        assert!(hostnames.windows(2).all(|w| w[0] == w[1]));
    }
}
