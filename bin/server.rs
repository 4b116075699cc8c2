// Academic Financial Management API - Web Server
// Person / Address / Tuition / Scholarship over in-memory stores

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use academic_finance::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("academic_finance=info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();

    // Fresh, empty stores on every start
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Academic finance API v{} listening on http://{addr}", academic_finance::VERSION);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
