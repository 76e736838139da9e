use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lectern::application::services::{ArtifactService, AudioValidator};
use lectern::infrastructure::audio::SymphoniaProbe;
use lectern::infrastructure::llm::GeminiClient;
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::presentation::config::API_KEY_FALLBACK_VARIABLE;
use lectern::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from(&settings), settings.server.port);

    anyhow::ensure!(
        !settings.model.api_key.trim().is_empty(),
        "model API key is not configured; set APP_MODEL__API_KEY or {}",
        API_KEY_FALLBACK_VARIABLE
    );

    let model = Arc::new(
        GeminiClient::new(
            &settings.model.api_key,
            &settings.model.name,
            &settings.model.base_url,
            settings.model.timeout(),
        )
        .context("Failed to build Gemini HTTP client")?,
    );

    let state = AppState {
        artifact_service: Arc::new(ArtifactService::new(model)),
        audio_validator: Arc::new(AudioValidator::new(
            Arc::new(SymphoniaProbe),
            settings.audio.max_duration(),
        )),
        max_upload_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    tracing::info!(
        model = %settings.model.name,
        max_duration_minutes = settings.audio.max_duration_minutes,
        "Listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
