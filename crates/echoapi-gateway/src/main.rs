//! echoapi gateway binary.
//!
//! - Echo endpoint: GET/POST/PUT/DELETE /api
//! - Metrics: GET /metrics
//! - Listens on 0.0.0.0:$PORT (default 5000) until killed

use tracing_subscriber::{fmt, EnvFilter};

use echoapi_core::error::{EchoApiError, Result};
use echoapi_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "echoapi-gateway failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "echoapi-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| EchoApiError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| EchoApiError::Internal(format!("server failed: {e}")))?;
    Ok(())
}
