// Framework bootstrap for the app server runtime.

use crate::frameworks::{config, db};
use crate::interface_adapters::clients::AuthClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().await?;

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn build_state() -> Result<Arc<AppState>> {
    let database_url = match config::database_url() {
        Some(value) => value,
        None => {
            tracing::error!("DATABASE_URL must be set");
            return Err(std::io::Error::other("DATABASE_URL must be set"));
        }
    };

    let pool = db::connect_pool(&database_url).await.map_err(|e| {
        tracing::error!(error = %e, "failed to connect to database");
        std::io::Error::other(e)
    })?;

    db::run_migrations(&pool).await.map_err(|e| {
        tracing::error!(error = %e, "failed to run migrations");
        std::io::Error::other(e)
    })?;

    let auth_base_url = config::auth_service_url();
    let auth_timeout = config::auth_timeout();
    let auth = AuthClient::new(auth_base_url.clone(), auth_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize auth client: {e}")))?;
    tracing::debug!(
        auth_base_url = %auth_base_url,
        auth_timeout_ms = auth_timeout.as_millis(),
        "auth client configured"
    );

    Ok(Arc::new(AppState {
        auth: Arc::new(auth),
        db: pool,
    }))
}
