//! meeting-digest server entry point

use std::sync::Arc;

use anyhow::Context;

use meeting_digest::config::AppConfig;
use meeting_digest::digest::DigestService;
use meeting_digest::server::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default()?;
    let digest = Arc::new(DigestService::new(&config));

    // Non-fatal: the backend may come up after us.
    match digest.backend_status().await {
        Ok(version) => log::info!("Ollama backend reachable (version {})", version),
        Err(e) => log::warn!("Ollama backend not reachable yet: {}", e),
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = build_router(digest, &config.server);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("meeting-digest listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
