use reqwest::Client;
use serde::Deserialize;

use super::ClientError;
use crate::models::{JoinRequest, TokenResponse};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for `POST /api/token`
#[derive(Clone)]
pub struct TokenClient {
    http: Client,
    endpoint: String,
}

impl TokenClient {
    /// `base_url` is the origin serving the API, e.g. "http://localhost:3000"
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}/api/token", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a token; non-2xx responses become `ClientError::Rejected`.
    pub async fn request_token(&self, request: &JoinRequest) -> Result<String, ClientError> {
        let res = self.http.post(&self.endpoint).json(request).send().await?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = res.json().await?;
        Ok(body.token)
    }
}
