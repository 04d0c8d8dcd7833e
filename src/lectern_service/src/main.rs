use std::sync::Arc;

use color_eyre::eyre::Result;
use lectern_adapters::{
    config::{AllowedOrigins, Settings},
    email::PostmarkEmailClient,
    http::AccountState,
    persistence::{PostgresResetTokenStore, PostgresUserStore},
    sessions::SessionConfig,
};
use lectern_core::{Email, SystemClock};
use lectern_service::AccountService;
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(settings.database.url.expose_secret())
        .await?;

    sqlx::migrate!().run(&pg_pool).await?;

    let user_store = Arc::new(PostgresUserStore::new(pg_pool.clone()));
    let reset_token_store = Arc::new(PostgresResetTokenStore::new(pg_pool));

    let http_client = HttpClient::builder()
        .timeout(std::time::Duration::from_millis(
            settings.email_client.timeout_millis,
        ))
        .build()?;

    let email_client = Arc::new(PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::try_from(Secret::from(settings.email_client.sender.clone()))?,
        settings.email_client.message_stream.clone(),
        settings.email_client.auth_token.clone(),
        http_client,
    ));

    let mut sessions = SessionConfig::new(settings.auth.jwt_secret.clone());
    sessions.token_ttl_seconds = settings.auth.token_ttl_seconds;

    let state = AccountState {
        user_store,
        reset_token_store,
        email_client,
        clock: Arc::new(SystemClock),
        sessions,
        reset_url_base: settings.reset.url_base.clone(),
    };

    let allowed_origins = AllowedOrigins::from_strings(&settings.application.allowed_origins);
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = tokio::net::TcpListener::bind((
        settings.application.host.as_str(),
        settings.application.port,
    ))
    .await?;

    AccountService::new(state).run(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
