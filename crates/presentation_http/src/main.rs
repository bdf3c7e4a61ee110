//! Voice agent HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{SessionStore, TurnOrchestrator};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, InMemorySessionStore, InferenceGenerationAdapter, ServerConfig,
    SpeechToTextAdapter, TextToSpeechAdapter, init_logging,
};
use presentation_http::{
    RequestIdLayer, routes, spawn_session_cleanup_task, state::AppState,
};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (mut config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.resolve_provider_keys();

    init_logging(&config.logging, config.server.log_format)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("Voice agent v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        voice = %config.pipeline.voice_id.as_deref().unwrap_or(&config.speech.default_voice),
        serialize_sessions = config.pipeline.serialize_sessions,
        "Configuration loaded"
    );

    let transcriber = SpeechToTextAdapter::assemblyai(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech-to-text: {e}"))?;
    let generator = InferenceGenerationAdapter::gemini(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;
    let synthesizer = TextToSpeechAdapter::murf(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize text-to-speech: {e}"))?;

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let orchestrator = TurnOrchestrator::new(
        Arc::new(transcriber),
        Arc::new(generator),
        Arc::new(synthesizer),
        Arc::clone(&sessions),
        config.pipeline.clone(),
    );

    let cleanup_handle = config.sessions.idle_ttl().map(|idle_ttl| {
        spawn_session_cleanup_task(
            Arc::clone(&sessions),
            idle_ttl,
            config.sessions.cleanup_interval(),
        )
    });

    let state = AppState::new(Arc::new(orchestrator));

    // Middleware order: first added = innermost
    let app = routes::create_router(state, config.server.max_body_size_audio_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let shutdown_started = Arc::new(Notify::new());

    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
                shutdown_started.notify_one();
            }
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = async {
            shutdown_started.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Shutdown timeout elapsed, dropping open connections");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
    }

    info!("Server shutdown complete");

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if !server.cors_enabled {
        return CorsLayer::new();
    }

    if server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
