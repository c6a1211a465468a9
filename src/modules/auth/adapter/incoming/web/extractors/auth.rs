use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::identity_verifier::{
    IdentityError, IdentityVerifier,
};
use crate::shared::api::ApiResponse;

/// An administrator whose bearer token the identity service accepted.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Header is checked before configuration: an anonymous caller always gets 401.
        let token = extract_token_from_header(req);
        let verifier = req
            .app_data::<web::Data<Arc<dyn IdentityVerifier + Send + Sync>>>()
            .cloned();

        Box::pin(async move {
            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let verifier = verifier.ok_or_else(|| {
                tracing::error!("Identity service is not configured");
                create_api_error(ApiResponse::configuration_error(
                    "Identity service is not configured",
                ))
            })?;

            match verifier.verify(&token).await {
                Ok(identity) => Ok(AdminUser {
                    user_id: identity.user_id,
                    email: identity.email,
                }),
                Err(IdentityError::InvalidCredential) => Err(create_api_error(
                    ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token"),
                )),
                Err(IdentityError::Unavailable(msg)) => {
                    tracing::error!(error = %msg, "Could not verify credential");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}
