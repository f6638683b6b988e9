//! Fleetline server binary.
//!
//! Loads `config/{env}.yaml`, initializes logging, connects PostgreSQL and
//! serves the gateway until the process is stopped.

use std::sync::Arc;

use anyhow::Context as _;

use fleetline::AppState;
use fleetline::config::AppConfig;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = fleetline::logging::init_logging(&config);

    tracing::info!(
        "Starting fleetline {} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let pool = fleetline::db::connect(&config.database_url(), config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;

    let state = Arc::new(AppState::new(pool));
    let app = fleetline::gateway::build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;
    Ok(())
}
