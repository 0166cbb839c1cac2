use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use voicegate::application::services::TranscriptionService;
use voicegate::infrastructure::backends::BackendFactory;
use voicegate::infrastructure::observability::{init_tracing, TracingConfig};
use voicegate::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(|e| anyhow::anyhow!("{}", e))?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let backend = BackendFactory::create(
        settings.backend.mode,
        &settings.backend.url,
        settings.backend.api_key.clone(),
        &settings.backend.language,
        settings.polling_settings(),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(backend),
        settings.retry_policy(),
        settings.classifier_policy(),
        settings.limits.min_payload_bytes,
        settings.backend.api_key.clone(),
    ));

    let state = AppState {
        transcription_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address: {}", e))?;

    tracing::info!(
        %addr,
        mode = ?settings.backend.mode,
        "Transcription gateway listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
