use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue},
    routing::post,
    Json, Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::error::{AppError, Result};
use crate::models::{JoinRequest, TokenResponse, VideoGrant};
use crate::state::AppState;

/// Token routes; responses are never cached
pub fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(issue_token))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// POST /api/token - Mint an access token for a room and identity
///
/// The body is parsed as JSON whatever its `Content-Type`.
async fn issue_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>> {
    let signer = state.signer.as_ref().ok_or_else(|| {
        tracing::error!("Token requested but LiveKit configuration is incomplete");
        AppError::Misconfigured("LiveKit credentials not configured".to_string())
    })?;

    let request: JoinRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected token request body");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let (room, username) = request
        .validated()
        .ok_or_else(|| AppError::BadRequest("Missing room or username".to_string()))?;

    let token = signer
        .sign(username, VideoGrant::full_access(room))
        .inspect_err(|e| tracing::error!(error = %e, room = %room, "Error generating token"))?;

    tracing::info!(room = %room, identity = %username, "Access token issued");

    Ok(Json(TokenResponse { token }))
}
