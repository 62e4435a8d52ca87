//! User service - CRUD API over users and their cars.
//!
//! # Startup
//!
//! Each step is fatal on failure:
//!
//! 1. Load configuration from the environment
//! 2. Initialize tracing (and Sentry when `SENTRY_DSN` is set)
//! 3. Open the `PostgreSQL` pool and ping it
//! 4. Build repositories and application state
//! 5. Register routes and serve until the process is killed

#![cfg_attr(not(test), forbid(unsafe_code))]

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service::config::ServiceConfig;
use user_service::db;
use user_service::middleware::with_request_tracing;
use user_service::routes;
use user_service::state::AppState;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServiceConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    tracing::debug!(database = ?config.database, "Opening database connection");
    let pool = db::create_pool(&config.database)
        .await
        .expect("Failed to create database pool");
    db::ping(&pool).await.expect("Database is unreachable");
    tracing::debug!("Database connected");

    // NOTE: The schema is not created or migrated here; see crates/user-service/schema.sql.

    let state = AppState::new(pool);
    tracing::debug!("Repositories created");

    let app = with_request_tracing(routes::routes())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!("user service listening on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
