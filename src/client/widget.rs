use super::ClientError;

/// What the conferencing widget needs to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub server_url: String,
    pub token: String,
    pub audio: bool,
    pub video: bool,
}

/// Handle reported by the widget once it has connected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub room: String,
    pub identity: String,
    pub session_id: String,
}

/// Embedded conferencing component.
///
/// Owns connection lifecycle, track subscription and controls after
/// `mount`; the page only learns about it through `RoomPage::on_connected`.
pub trait ConferenceWidget {
    fn mount(&mut self, options: &WidgetOptions) -> Result<(), ClientError>;
}

/// Widget that only records the mount in the log
#[derive(Debug, Default)]
pub struct LoggingWidget;

impl ConferenceWidget for LoggingWidget {
    fn mount(&mut self, options: &WidgetOptions) -> Result<(), ClientError> {
        tracing::info!(
            server_url = %options.server_url,
            audio = options.audio,
            video = options.video,
            "Conference widget mounted"
        );
        Ok(())
    }
}
