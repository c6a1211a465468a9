// src/shared/api/response.rs
use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope shared by every endpoint except the CSV export.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    /// Error envelope that still carries a payload, e.g. per-sink outcomes.
    pub fn failure(status: StatusCode, code: &str, message: &str, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            data: Some(data),
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }
}

impl ApiResponse<()> {
    /// `{"success": true}` with no payload.
    pub fn ok() -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            error: None,
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    /// Missing backend configuration; fixable by the operator, not the caller.
    pub fn configuration_error(message: &str) -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CONFIGURATION_ERROR",
            message,
        )
    }

    pub fn method_not_allowed(allow: &str) -> HttpResponse {
        HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, allow.to_string()))
            .json(ApiResponse::<()> {
                success: false,
                data: None,
                error: Some(ApiError {
                    code: "METHOD_NOT_ALLOWED".to_string(),
                    message: format!("Method not allowed, use {allow}"),
                }),
            })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
