// src/config.rs
use crate::auth::adapter::outgoing::identity::jwt_verifier::DEFAULT_AUDIENCE;
use crate::auth::adapter::outgoing::identity::JwtVerifierConfig;
use crate::modules::crm::adapter::outgoing::ActiveCampaignConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityConfig {
    /// Ask the identity service about every token.
    Remote { base_url: String, api_key: String },
    /// Verify the identity service's HS256 tokens in-process.
    LocalJwt(JwtVerifierConfig),
}

/// Backends are optional: a missing one becomes a configuration error on the
/// endpoints that need it, not a startup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database_url: Option<String>,
    pub crm: Option<ActiveCampaignConfig>,
    pub identity: Option<IdentityConfig>,
}

impl AppConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset.
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server = ServerConfig {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match var("PORT") {
                Some(raw) => parse_number("PORT", raw)?,
                None => DEFAULT_PORT,
            },
        };

        let crm = match (var("AC_API_URL"), var("AC_API_KEY"), var("AC_LIST_ID")) {
            (Some(api_url), Some(api_key), Some(list_id)) => Some(ActiveCampaignConfig {
                api_url,
                api_key,
                list_id: parse_number("AC_LIST_ID", list_id)?,
                custom_field_id: var("AC_CUSTOM_FIELD_ID"),
            }),
            _ => None,
        };

        let identity = match var("IDENTITY_JWT_SECRET") {
            Some(secret_key) => Some(IdentityConfig::LocalJwt(JwtVerifierConfig {
                secret_key,
                audience: var("IDENTITY_JWT_AUDIENCE")
                    .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            })),
            None => {
                let api_key =
                    var("SUPABASE_SERVICE_ROLE_KEY").or_else(|| var("SUPABASE_ANON_KEY"));
                match (var("SUPABASE_URL"), api_key) {
                    (Some(base_url), Some(api_key)) => {
                        Some(IdentityConfig::Remote { base_url, api_key })
                    }
                    _ => None,
                }
            }
        };

        Ok(Self {
            server,
            database_url: var("DATABASE_URL"),
            crm,
            identity,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value: raw })
}
