use axum::http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

/// Service configuration, loaded from an optional `configuration.json` next
/// to the binary plus `APP__`-prefixed environment overrides, e.g.
/// `APP__AUTH__JWT_SECRET`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub email_client: EmailClientSettings,
    pub reset: ResetSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    #[serde(default = "default_message_stream")]
    pub message_stream: String,
    #[serde(default = "default_email_timeout_millis")]
    pub timeout_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetSettings {
    /// Front-end URL the reset token is appended to.
    pub url_base: String,
}

fn default_max_connections() -> u32 {
    5
}

fn default_token_ttl_seconds() -> i64 {
    3600
}

fn default_message_stream() -> String {
    "outbound".to_string()
}

fn default_email_timeout_millis() -> u64 {
    10_000
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// CORS origin allow-list parsed once at startup.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn from_strings(origins: &[String]) -> Self {
        let parsed = origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .inspect_err(|_| tracing::warn!(%origin, "ignoring unparsable CORS origin"))
                    .ok()
            })
            .collect();
        Self(parsed)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
