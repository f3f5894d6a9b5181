use std::future::Future;

use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Resolves on Ctrl+C. A failure to install the handler is treated as "never".
async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Build the app and serve it until Ctrl+C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    run_until(config, ctrl_c()).await
}

/// Build the app and serve it until `shutdown` resolves; in-flight requests
/// are allowed to finish.
pub async fn run_until<F>(mut config: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.normalize_and_validate().map_err(|e| {
        let err = StartupError::InvalidConfig(e.to_string());
        err.log();
        err
    })?;

    // One store for the whole process lifetime.
    let state = AppState::in_memory(config.import.max_upload_bytes);
    let app = routes::build_router(state, routes::build_cors());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await.map_err(|source| {
        let err = StartupError::Bind { addr: addr.clone(), source };
        err.log();
        err
    })?;
    let local = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(addr = %local, max_upload_bytes = config.import.max_upload_bytes, "starting person api");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(anyhow::Error::from)?;
    info!("person api stopped");
    Ok(())
}
