pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::identity::{JwtIdentityVerifier, SupabaseIdentityVerifier};
use crate::auth::application::ports::outgoing::IdentityVerifier;
use crate::config::{AppConfig, IdentityConfig};
use crate::modules::crm::adapter::outgoing::ActiveCampaignClient;
use crate::modules::crm::application::ports::outgoing::CrmContacts;
use crate::modules::reseller::adapter::outgoing::{
    ResellerQueryPostgres, ResellerRepositoryPostgres,
};
use crate::modules::reseller::application::ports::outgoing::reseller_repository::ResellerRepository;
use crate::modules::reseller::application::reseller_use_cases::ResellerUseCases;
use crate::modules::submission::application::ports::incoming::use_cases::SubmitApplicationUseCase;
use crate::modules::submission::application::services::SubmitApplicationService;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    /// Admin use cases; `None` when no database is configured.
    pub reseller: Option<ResellerUseCases>,
    pub submit_application: Arc<dyn SubmitApplicationUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server.bind_address();

    // Database connection
    let db_arc: Option<Arc<DatabaseConnection>> = match &config.database_url {
        Some(db_url) => {
            let mut opt = ConnectOptions::new(db_url.clone());
            opt.max_connections(50)
                .min_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .context("failed to connect to database")?;
            Some(Arc::new(conn))
        }
        None => {
            warn!("DATABASE_URL not set: admin endpoints will report a configuration error");
            None
        }
    };

    let http_client = reqwest::Client::new();

    // Record store
    let reseller_use_cases = db_arc.as_ref().map(|db| {
        ResellerUseCases::new(
            ResellerQueryPostgres::new(Arc::clone(db)),
            ResellerRepositoryPostgres::new(Arc::clone(db)),
        )
    });
    let store = db_arc
        .as_ref()
        .map(|db| -> Arc<dyn ResellerRepository + Send + Sync> {
            Arc::new(ResellerRepositoryPostgres::new(Arc::clone(db)))
        });

    // CRM
    let crm: Option<Arc<dyn CrmContacts + Send + Sync>> = match config.crm.clone() {
        Some(crm_config) => Some(Arc::new(ActiveCampaignClient::new(
            http_client.clone(),
            crm_config,
        ))),
        None => {
            warn!("ActiveCampaign not configured: submissions will skip the CRM");
            None
        }
    };

    // Identity
    let identity_verifier: Option<Arc<dyn IdentityVerifier + Send + Sync>> =
        match config.identity.clone() {
            Some(IdentityConfig::LocalJwt(jwt_config)) => {
                info!("Verifying admin tokens locally");
                Some(Arc::new(JwtIdentityVerifier::new(jwt_config)))
            }
            Some(IdentityConfig::Remote { base_url, api_key }) => Some(Arc::new(
                SupabaseIdentityVerifier::new(http_client.clone(), &base_url, &api_key),
            )),
            None => {
                warn!("Identity service not configured: admin endpoints will report a configuration error");
                None
            }
        };

    let state = AppState {
        reseller: reseller_use_cases,
        submit_application: Arc::new(SubmitApplicationService::new(store, crm)),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config());

        if let Some(verifier) = &identity_verifier {
            app = app.app_data(web::Data::new(Arc::clone(verifier)));
        }
        if let Some(db) = &db_arc {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public submission
    cfg.service(crate::modules::submission::adapter::incoming::web::routes::resource());
    // Admin
    cfg.configure(crate::modules::reseller::adapter::incoming::web::routes::configure);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
