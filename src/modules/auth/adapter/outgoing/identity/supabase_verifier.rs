use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::identity_verifier::{
    Identity, IdentityError, IdentityVerifier,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserEndpointError {
    #[error("request failed: {0}")]
    Send(String),
    #[error("could not read response body: {0}")]
    ReadBody(String),
}

/// HTTP seam for `GET /auth/v1/user`: returns the status code and raw body.
#[async_trait]
pub trait UserEndpoint: Send + Sync {
    async fn fetch_user(&self, token: &str) -> Result<(u16, String), UserEndpointError>;
}

pub struct ReqwestUserEndpoint {
    client: reqwest::Client,
    user_url: String,
    api_key: String,
}

impl ReqwestUserEndpoint {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            user_url: format!("{}/auth/v1/user", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl UserEndpoint for ReqwestUserEndpoint {
    async fn fetch_user(&self, token: &str) -> Result<(u16, String), UserEndpointError> {
        let response = self
            .client
            .get(&self.user_url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| UserEndpointError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UserEndpointError::ReadBody(e.to_string()))?;

        Ok((status, body))
    }
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    email: Option<String>,
}

/// Asks the hosted identity service who owns the token.
pub struct SupabaseIdentityVerifier {
    endpoint: Box<dyn UserEndpoint>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for SupabaseIdentityVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseIdentityVerifier").finish()
    }
}

impl SupabaseIdentityVerifier {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self::with_endpoint(Box::new(ReqwestUserEndpoint::new(client, base_url, api_key)))
    }

    pub fn with_endpoint(endpoint: Box<dyn UserEndpoint>) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        let (status, body) = self.endpoint.fetch_user(token).await.map_err(|e| {
            tracing::error!(error = %e, "Identity service request failed");
            IdentityError::Unavailable(e.to_string())
        })?;

        match status {
            200..=299 => {
                let user: UserPayload = serde_json::from_str(&body).map_err(|e| {
                    tracing::error!(error = %e, "Unexpected identity service payload");
                    IdentityError::Unavailable(e.to_string())
                })?;

                Ok(Identity {
                    user_id: user.id,
                    email: user.email,
                })
            }
            400 | 401 | 403 | 404 => {
                tracing::debug!(status, "Identity service rejected credential");
                Err(IdentityError::InvalidCredential)
            }
            other => {
                tracing::error!(status = other, "Identity service answered with an error");
                Err(IdentityError::Unavailable(format!(
                    "identity service returned HTTP {other}"
                )))
            }
        }
    }
}
