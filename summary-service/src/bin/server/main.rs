use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use summary_service::config::Config;
use summary_service::domain::summary::service::SummaryService;
use summary_service::domain::user::service::UserService;
use summary_service::inbound::http::router::create_router;
use summary_service::outbound::repositories::PostgresUserRepository;
use summary_service::outbound::summarizer::OpenAiSummarizer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summary_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "summary-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        summarizer_model = %config.summarizer.model,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(max_connections = 5, "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!("Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let user_service = Arc::new(UserService::new(user_repository));
    let summarizer = Arc::new(OpenAiSummarizer::new(&config.summarizer));
    let summary_service = Arc::new(SummaryService::new(summarizer));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(address = %http_address, "Http server listening");

    let application = create_router(
        user_service,
        summary_service,
        authenticator,
        config.jwt.expiration_minutes,
    );
    axum::serve(http_listener, application).await?;

    Ok(())
}
