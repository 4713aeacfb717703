//! HTTP surface: an explicitly constructed [`axum::Router`] over [`AppState`].

mod error;
mod form;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use anyhow::Context as _;

use crate::{config::ServiceConfig, foundation::error::CanvasResult};

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> CanvasResult<()> {
    config.validate()?;
    let state = AppState::new(&config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    let addr = listener.local_addr().context("read bound address")?;
    tracing::info!(
        %addr,
        data_dir = %config.data_dir.display(),
        canvas = config.routes.canvas,
        ticker = config.routes.ticker,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
