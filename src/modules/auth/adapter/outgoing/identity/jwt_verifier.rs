use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::identity_verifier::{
    Identity, IdentityError, IdentityVerifier,
};

pub const DEFAULT_AUDIENCE: &str = "authenticated";

/// Claims carried by the identity service's access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub aud: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtVerifierConfig {
    pub secret_key: String,
    pub audience: String,
}

/// Verifies HS256 access tokens locally with the shared signing secret.
#[derive(Clone)]
pub struct JwtIdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtIdentityVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtIdentityVerifier")
            .field("config", &"JwtVerifierConfig")
            .finish()
    }
}

impl JwtIdentityVerifier {
    pub fn new(config: JwtVerifierConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_audience(&[config.audience.as_str()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        let decoded = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: Wrong audience");
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                    }
                }

                IdentityError::InvalidCredential
            })?;

        Ok(Identity {
            user_id: decoded.claims.sub,
            email: decoded.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{sign_token, TEST_JWT_SECRET};
    use chrono::{Duration, Utc};

    fn verifier() -> JwtIdentityVerifier {
        JwtIdentityVerifier::new(JwtVerifierConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        })
    }

    fn claims(exp_offset: Duration, aud: &str) -> AccessClaims {
        AccessClaims {
            sub: Uuid::new_v4(),
            exp: (Utc::now() + exp_offset).timestamp(),
            aud: aud.to_string(),
            email: Some("admin@pedireito.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_token() {
        let claims = claims(Duration::hours(1), DEFAULT_AUDIENCE);
        let user_id = claims.sub;
        let token = sign_token(&claims, TEST_JWT_SECRET);

        let identity = verifier().verify(&token).await.unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email.as_deref(), Some("admin@pedireito.com"));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let token = sign_token(&claims(-Duration::hours(2), DEFAULT_AUDIENCE), TEST_JWT_SECRET);

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(IdentityError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_wrong_secret() {
        let token = sign_token(
            &claims(Duration::hours(1), DEFAULT_AUDIENCE),
            "some_other_secret_that_is_long_enough",
        );

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(IdentityError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_wrong_audience() {
        let token = sign_token(&claims(Duration::hours(1), "anon"), TEST_JWT_SECRET);

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(IdentityError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let result = verifier().verify("not-a-jwt").await;
        assert_eq!(result, Err(IdentityError::InvalidCredential));
    }
}
