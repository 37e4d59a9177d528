use std::env;

/// Room joined by the room page when `ROOM_NAME` is not set
pub const DEFAULT_ROOM_NAME: &str = "elderly-room";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub room_name: String,
    pub log_format: LogFormat,
    /// `Err` when any LiveKit value is missing; token requests then fail with 500
    pub livekit: Result<LivekitConfig, ConfigError>,
}

/// Credentials and public URL of the LiveKit deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivekitConfig {
    pub api_key: String,
    pub api_secret: String,
    pub server_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            room_name: env::var("ROOM_NAME")
                .ok()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_ROOM_NAME.to_string()),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            livekit: LivekitConfig::from_parts(
                env::var("LIVEKIT_API_KEY").ok(),
                env::var("LIVEKIT_API_SECRET").ok(),
                env::var("NEXT_PUBLIC_LIVEKIT_URL").ok(),
            ),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl LivekitConfig {
    /// Build from raw values; empty strings count as missing.
    pub fn from_parts(
        api_key: Option<String>,
        api_secret: Option<String>,
        server_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let present = |value: Option<String>, name: &'static str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(LivekitConfig {
            api_key: present(api_key, "LIVEKIT_API_KEY")?,
            api_secret: present(api_secret, "LIVEKIT_API_SECRET")?,
            server_url: present(server_url, "NEXT_PUBLIC_LIVEKIT_URL")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_livekit_config_complete() {
        let config = LivekitConfig::from_parts(some("key"), some("secret"), some("wss://lk"))
            .expect("Should accept complete values");

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.server_url, "wss://lk");
    }

    #[test]
    fn test_livekit_config_missing_secret() {
        let err = LivekitConfig::from_parts(some("key"), None, some("wss://lk")).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("LIVEKIT_API_SECRET"));
    }

    #[test]
    fn test_livekit_config_empty_counts_as_missing() {
        let err = LivekitConfig::from_parts(some("key"), some("secret"), some("")).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("NEXT_PUBLIC_LIVEKIT_URL"));
    }
}
