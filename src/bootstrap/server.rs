use std::net::SocketAddr;

use crate::config::AppConfig;

/// Binds the listener and serves the assembled router. Startup failure is
/// fatal and propagates out of `main`.
pub async fn init_server() -> anyhow::Result<()> {
    let port = AppConfig::port().await;

    // Build the router
    let app = crate::routes::routes();

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mercenary API running on port {}", port);
    tracing::info!("API docs available at http://localhost:{}/api/docs", port);

    axum::serve(listener, app).await?;

    Ok(())
}
