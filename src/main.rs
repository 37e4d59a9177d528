use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use elderly_room_backend::api;
use elderly_room_backend::config::{Config, LogFormat};
use elderly_room_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = Config::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }

    tracing::info!("Starting elderly room backend...");
    tracing::info!(
        host = %config.server_host,
        port = %config.server_port,
        room = %config.room_name,
        "Configuration loaded"
    );

    match &config.livekit {
        Ok(livekit) => tracing::info!(server_url = %livekit.server_url, "Token issuer ready"),
        Err(e) => tracing::error!(
            error = %e,
            "LiveKit configuration incomplete; token requests will fail"
        ),
    }

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(config);

    // Build router
    let app = Router::new()
        .merge(api::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Handle shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down...");
        },
    }
}
