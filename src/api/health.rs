use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub token_issuer: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let (status, token_issuer) = if state.signer.is_some() {
        ("healthy", "configured")
    } else {
        ("unhealthy", "misconfigured")
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        token_issuer: token_issuer.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::api::create_router;
    use crate::config::{Config, ConfigError, LogFormat};
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health_reports_misconfiguration() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            room_name: "elderly-room".to_string(),
            log_format: LogFormat::Pretty,
            livekit: Err(ConfigError::MissingVar("LIVEKIT_API_KEY")),
        };
        let app = create_router(AppState::new(config));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builder should succeed");
        let response = app.oneshot(request).await.expect("request should succeed");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");

        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["token_issuer"], "misconfigured");
    }
}
