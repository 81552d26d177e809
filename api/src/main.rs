mod error;
mod routes;
mod state;

use anyhow::{Context, Result};
use rag_system::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("Failed to start server: {:#}", e);
        eprintln!("Failed to start server: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    // Document loading and indexing are blocking; nothing is serving yet.
    let state = AppState::new(&config).context("Failed to initialize RAG system")?;

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
