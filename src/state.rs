use std::sync::Arc;

use crate::auth::{AccessTokenIssuer, TokenSigner};
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when the LiveKit configuration is incomplete
    pub signer: Option<Arc<dyn TokenSigner>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let signer = config
            .livekit
            .as_ref()
            .ok()
            .map(|livekit| Arc::new(AccessTokenIssuer::new(livekit)) as Arc<dyn TokenSigner>);

        Self {
            config: Arc::new(config),
            signer,
        }
    }

    /// Replace the signer, keeping the rest of the state.
    ///
    /// Has no effect while the LiveKit configuration is incomplete; such a
    /// state keeps answering token requests with "Server misconfigured".
    pub fn with_signer(mut self, signer: Arc<dyn TokenSigner>) -> Self {
        if self.config.livekit.is_ok() {
            self.signer = Some(signer);
        }
        self
    }

    /// Public LiveKit URL handed to the room page, if configured
    pub fn server_url(&self) -> Option<&str> {
        self.config
            .livekit
            .as_ref()
            .ok()
            .map(|livekit| livekit.server_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, LivekitConfig, LogFormat};
    use crate::error::Result;
    use crate::models::VideoGrant;

    struct StaticSigner;

    impl TokenSigner for StaticSigner {
        fn sign(&self, _identity: &str, _grant: VideoGrant) -> Result<String> {
            Ok("static-token".to_string())
        }
    }

    fn test_config(livekit: std::result::Result<LivekitConfig, ConfigError>) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            room_name: "elderly-room".to_string(),
            log_format: LogFormat::Pretty,
            livekit,
        }
    }

    #[test]
    fn test_with_signer_keeps_misconfigured_state() {
        let state = AppState::new(test_config(Err(ConfigError::MissingVar(
            "LIVEKIT_API_KEY",
        ))))
        .with_signer(Arc::new(StaticSigner));

        assert!(state.signer.is_none());
        assert!(state.server_url().is_none());
    }

    #[test]
    fn test_with_signer_replaces_configured_signer() {
        let state = AppState::new(test_config(Ok(LivekitConfig {
            api_key: "APIdevkey".to_string(),
            api_secret: "test-secret-key".to_string(),
            server_url: "ws://localhost:7880".to_string(),
        })))
        .with_signer(Arc::new(StaticSigner));

        let token = state
            .signer
            .as_ref()
            .expect("Should have a signer")
            .sign("alice", VideoGrant::full_access("elderly-room"))
            .expect("Should sign");
        assert_eq!(token, "static-token");
        assert_eq!(state.server_url(), Some("ws://localhost:7880"));
    }
}
