pub mod health;
pub mod pages;
pub mod token;

use axum::Router;

use crate::state::AppState;

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .merge(pages::page_routes())
        .with_state(state)
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(token::token_routes())
}
