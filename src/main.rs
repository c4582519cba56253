use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gitmap::api;
use gitmap::config::Config;
use gitmap::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if config.llm.api_key.is_some() {
        tracing::info!("Keyword generation: {} ({})", config.llm.model, config.llm.base_url);
    } else {
        tracing::warn!("GEMINI_API_KEY not set, searches will use the raw query");
    }
    tracing::info!(
        "Repository search: {} (per_page={}, token={})",
        config.github.api_url,
        config.github.per_page,
        config.github.token.is_some()
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config).context("Failed to initialize application state")?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
