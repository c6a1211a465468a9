use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::adapter::outgoing::identity::jwt_verifier::{
    AccessClaims, JwtIdentityVerifier, JwtVerifierConfig, DEFAULT_AUDIENCE,
};
use crate::auth::application::ports::outgoing::identity_verifier::IdentityVerifier;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn sign_token<T: Serialize>(claims: &T, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn test_verifier() -> Arc<dyn IdentityVerifier + Send + Sync> {
    Arc::new(JwtIdentityVerifier::new(JwtVerifierConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        audience: DEFAULT_AUDIENCE.to_string(),
    }))
}

/// `Authorization` header value for a valid admin token.
pub fn bearer(user_id: Uuid) -> String {
    let claims = AccessClaims {
        sub: user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
        aud: DEFAULT_AUDIENCE.to_string(),
        email: Some("admin@pedireito.com".to_string()),
    };

    format!("Bearer {}", sign_token(&claims, TEST_JWT_SECRET))
}
