// src/shared/api/cors.rs
use actix_web::dev::HttpServiceFactory;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse, Route};

use crate::shared::api::ApiResponse;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// One `/api` resource: the given route, an empty-bodied `OPTIONS` answer,
/// a 405 with `Allow` for every other method, and permissive CORS headers on
/// all of them.
pub fn api_resource(path: &str, allow: &'static str, route: Route) -> impl HttpServiceFactory {
    let methods = format!("{allow}, OPTIONS");

    web::resource(path)
        .route(route)
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(move || async move { ApiResponse::method_not_allowed(allow) }))
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Origin", "*"))
                .add(("Access-Control-Allow-Methods", methods))
                .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS)),
        )
}
