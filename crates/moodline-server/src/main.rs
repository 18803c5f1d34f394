mod api;
mod middleware;

use std::sync::Arc;

use moodline_engines::Dispatcher;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = moodline_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let overrides = config
        .lexicon_overrides_path
        .as_deref()
        .map(moodline_core::load_lexicon_overrides)
        .transpose()?;
    if let Some(overrides) = &overrides {
        tracing::info!(words = overrides.words.len(), "loaded lexicon overrides");
    }

    let dispatcher = Arc::new(Dispatcher::from_config(&config, overrides.as_ref())?);

    if config.neural_warmup {
        match dispatcher.warm_up().await {
            Ok(()) => tracing::info!("sentiment engines warmed up"),
            Err(e) => tracing::warn!(
                error = %e,
                "engine warm-up failed; neural model will be probed on first request"
            ),
        }
    }

    let app = build_app(AppState { dispatcher });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "moodline server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
