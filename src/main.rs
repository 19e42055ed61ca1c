use std::sync::Arc;

use wayfinder::api::{AppState, create_router};
use wayfinder::config::Config;
use wayfinder::llm::CompletionClient;
use wayfinder::search::SearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    // Missing provider credentials fail here, not per-request.
    let config = Config::from_env()?;

    let state = Arc::new(AppState {
        search: SearchClient::new(&config.tavily_api_key),
        llm: CompletionClient::new(&config.openai_api_key),
    });

    let app = create_router(state, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
