use std::net::SocketAddr;
use std::sync::Arc;

use meili::MeiliClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    app_state::AppState,
    config::{current_environment, read_config},
    domain::CounterStore,
    provider::MeiliProvider,
};

mod app_state;
mod config;
mod domain;
mod provider;
mod rate_limit;
mod router;
mod routes;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = read_config()?;
    let environment = current_environment();

    let client = MeiliClient::new(&config.meili.endpoint, config.meili.api_key.clone())?;
    let provider = Arc::new(MeiliProvider::new(client));

    let counters = CounterStore::load(config.stats.file.clone()).await?;
    let persist_task = counters.start_persist_task();

    let app_state = AppState::new(provider, counters.clone());
    let app = router::create(environment, app_state);

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {} ({})", address, environment);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // One last save, then the periodic task can go.
    persist_task.abort();
    counters.persist().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down");
}
