use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::LivekitConfig;
use crate::error::{AppError, Result};
use crate::models::{Claims, VideoGrant};

/// Token lifetime applied by the LiveKit server SDKs when none is given
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 6 * 60 * 60;

/// Mints signed access tokens for a room and identity
pub trait TokenSigner: Send + Sync {
    fn sign(&self, identity: &str, grant: VideoGrant) -> Result<String>;
}

/// HS256 access tokens in the LiveKit claim layout
#[derive(Clone)]
pub struct AccessTokenIssuer {
    api_key: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl AccessTokenIssuer {
    pub fn new(config: &LivekitConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            encoding_key: EncodingKey::from_secret(config.api_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.api_secret.as_bytes()),
            ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    /// Validate a token issued by this key pair and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.api_key]);
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::BadRequest(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

impl TokenSigner for AccessTokenIssuer {
    fn sign(&self, identity: &str, grant: VideoGrant) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            nbf: now,
            exp: now + self.ttl_seconds,
            jti: Uuid::new_v4().to_string(),
            video: grant,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }
}
