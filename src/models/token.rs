use serde::{Deserialize, Serialize};

/// Body of `POST /api/token`
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinRequest {
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl JoinRequest {
    pub fn new(room: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
            username: Some(username.into()),
        }
    }

    /// Returns `(room, username)` when both are present and non-empty.
    pub fn validated(&self) -> Option<(&str, &str)> {
        let room = self.room.as_deref().filter(|r| !r.is_empty())?;
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        Some((room, username))
    }
}

/// Successful token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Room permissions carried in the `video` claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    /// Join, publish and subscribe on `room`.
    pub fn full_access(room: &str) -> Self {
        Self {
            room: room.to_string(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
        }
    }
}

/// JWT claims in the layout LiveKit servers expect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String, // api key
    pub sub: String, // participant identity
    pub nbf: i64,
    pub exp: i64,
    pub jti: String,
    pub video: VideoGrant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_rejects_missing_and_empty() {
        let missing: JoinRequest = serde_json::from_str(r#"{"room":"elderly-room"}"#).unwrap();
        assert!(missing.validated().is_none());

        let empty: JoinRequest =
            serde_json::from_str(r#"{"room":"","username":"alice"}"#).unwrap();
        assert!(empty.validated().is_none());

        let ok = JoinRequest::new("elderly-room", "alice");
        assert_eq!(ok.validated(), Some(("elderly-room", "alice")));
    }

    #[test]
    fn test_video_grant_uses_camel_case() {
        let value = serde_json::to_value(VideoGrant::full_access("elderly-room")).unwrap();

        assert_eq!(value["room"], "elderly-room");
        assert_eq!(value["roomJoin"], true);
        assert_eq!(value["canPublish"], true);
        assert_eq!(value["canSubscribe"], true);
    }
}
