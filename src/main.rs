use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use mailtriage::application::ports::{FileLoader, TextNormalizer};
use mailtriage::application::services::{ClassificationService, ReplyService, TriageService};
use mailtriage::infrastructure::llm::LanguageModelFactory;
use mailtriage::infrastructure::observability::{TracingConfig, init_tracing};
use mailtriage::infrastructure::text_processing::{CompositeFileLoader, PortugueseNormalizer};
use mailtriage::presentation::{AppState, Environment, Settings, create_router};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ));

    let model = LanguageModelFactory::create(&settings.gemini)
        .await
        .context("Failed to initialize language model")?;
    tracing::info!(model = model.model_id(), "Language model ready");

    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());
    let normalizer: Arc<dyn TextNormalizer> = Arc::new(PortugueseNormalizer::new());

    let triage_service = Arc::new(TriageService::new(
        file_loader,
        normalizer,
        ClassificationService::new(Arc::clone(&model)),
        ReplyService::new(Arc::clone(&model)),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        triage_service,
        model,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}
