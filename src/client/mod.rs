//! Room join flow: fetch a token, then hand it to the conferencing widget.
//!
//! The page moves `AwaitingToken -> Joined` on success. A failed fetch is
//! surfaced as `Failed` and can be retried; `Joined` is terminal.

pub mod identity;
pub mod token_client;
pub mod widget;

pub use identity::generate_identity;
pub use token_client::TokenClient;
pub use widget::{ConferenceWidget, LoggingWidget, SessionHandle, WidgetOptions};

use crate::models::JoinRequest;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Widget error: {0}")]
    Widget(String),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}

/// What the room page currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomView {
    /// "Getting token..."
    AwaitingToken,
    /// Token fetch or widget mount failed; `retry` is available
    Failed { reason: String },
    /// Widget mounted with this token
    Joined { token: String },
}

pub struct RoomPage<W> {
    client: TokenClient,
    widget: W,
    room: String,
    identity: String,
    server_url: String,
    view: RoomView,
    session: Option<SessionHandle>,
}

impl<W: ConferenceWidget> RoomPage<W> {
    pub fn new(
        client: TokenClient,
        widget: W,
        room: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            widget,
            room: room.into(),
            identity: generate_identity(),
            server_url: server_url.into(),
            view: RoomView::AwaitingToken,
            session: None,
        }
    }

    pub fn view(&self) -> &RoomView {
        &self.view
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    /// Initial display: issue the one token request for this page.
    pub async fn load(&mut self) -> Result<&RoomView, ClientError> {
        if self.view != RoomView::AwaitingToken {
            return Err(ClientError::InvalidState("page already loaded"));
        }
        Ok(self.join().await)
    }

    /// Re-issue the token request after a failure, keeping the identity.
    pub async fn retry(&mut self) -> Result<&RoomView, ClientError> {
        if !matches!(self.view, RoomView::Failed { .. }) {
            return Err(ClientError::InvalidState("retry is only available after a failure"));
        }
        self.view = RoomView::AwaitingToken;
        Ok(self.join().await)
    }

    /// Connected callback from the widget
    pub fn on_connected(&mut self, session: SessionHandle) {
        tracing::info!(
            room = %session.room,
            identity = %session.identity,
            session_id = %session.session_id,
            "Room connected"
        );
        self.session = Some(session);
    }

    async fn join(&mut self) -> &RoomView {
        let request = JoinRequest::new(self.room.as_str(), self.identity.as_str());

        self.view = match self.fetch_and_mount(&request).await {
            Ok(token) => RoomView::Joined { token },
            Err(e) => {
                tracing::error!(error = %e, room = %self.room, "Failed to get token");
                RoomView::Failed {
                    reason: e.to_string(),
                }
            }
        };
        &self.view
    }

    async fn fetch_and_mount(&mut self, request: &JoinRequest) -> Result<String, ClientError> {
        let token = self.client.request_token(request).await?;

        self.widget.mount(&WidgetOptions {
            server_url: self.server_url.clone(),
            token: token.clone(),
            audio: true,
            video: true,
        })?;

        Ok(token)
    }
}
