mod config;
mod errors;
mod routes;
mod shutdown;
mod telemetry;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::routes::{build_router, HEALTH_ROUTE};
use crate::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    telemetry::init(&config.rust_log);

    info!("Starting health-api v{}", env!("CARGO_PKG_VERSION"));

    let app = build_router().layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}, serving {HEALTH_ROUTE}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
