use axum::{extract::State, response::Html, routing::get, Router};

use crate::error::{AppError, Result};
use crate::state::AppState;

const HOME_PAGE: &str = include_str!("../../assets/home.html");
const ROOM_PAGE: &str = include_str!("../../assets/room.html");

/// Page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/room", get(room))
}

/// GET / - Landing page
async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// GET /room - Page that fetches a token and joins the configured room
async fn room(State(state): State<AppState>) -> Result<Html<String>> {
    let page = render_room_page(&state.config.room_name, state.server_url().unwrap_or_default())?;
    Ok(Html(page))
}

/// Fill the room page template with JS string literals.
pub fn render_room_page(room_name: &str, server_url: &str) -> Result<String> {
    Ok(ROOM_PAGE
        .replace("__ROOM_NAME__", &js_string(room_name)?)
        .replace("__SERVER_URL__", &js_string(server_url)?))
}

fn js_string(value: &str) -> Result<String> {
    let literal = serde_json::to_string(value)
        .map_err(|e| AppError::InternalError(format!("Failed to render page: {}", e)))?;
    // keep the literal from closing the surrounding <script>
    Ok(literal.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_page_embeds_room_and_url() {
        let page = render_room_page("elderly-room", "wss://lk.example.com")
            .expect("Should render page");

        assert!(page.contains(r#"const ROOM_NAME = "elderly-room";"#));
        assert!(page.contains(r#"const SERVER_URL = "wss://lk.example.com";"#));
        assert!(page.contains("Getting token..."));
        assert!(!page.contains("__ROOM_NAME__"));
    }

    #[test]
    fn test_room_page_escapes_script_close() {
        let page = render_room_page("</script><b>", "").expect("Should render page");

        assert!(page.contains(r#"const ROOM_NAME = "<\/script><b>";"#));
    }

    #[test]
    fn test_room_page_offers_retry_after_connect_failure() {
        let page = render_room_page("elderly-room", "wss://lk.example.com")
            .expect("Should render page");

        let connect_failure = page
            .split("console.error('Error connecting to room:', error);")
            .nth(1)
            .expect("Should handle connect failure");
        let handler = connect_failure.split('}').next().unwrap_or_default();

        assert!(handler.contains("Could not connect to the room: "));
        assert!(handler.contains("retry.hidden = false;"));
    }

    #[test]
    fn test_home_page_links_to_room() {
        assert!(HOME_PAGE.contains(r#"href="/room""#));
        assert!(HOME_PAGE.contains("Elderly AI Assistant"));
    }
}
