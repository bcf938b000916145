// File: src/main.rs
// Purpose: Load configuration, set up logging and serve the storefront

mod server;

use anyhow::{Context, Result};
use std::sync::Arc;
use storefront::{App, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=debug,tower_http=info")),
        )
        .init();

    let config = Config::load_default()
        .context("failed to load storefront.toml")?
        .with_env_overrides();

    info!(
        project = %config.project.name,
        routes_dir = %config.routing.routes_dir,
        "starting storefront"
    );

    let app = Arc::new(App::new(&config));
    for route in app.router().routes() {
        info!(id = %route.id, pattern = %route.pattern, "route");
    }

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running at http://{}", addr);
    axum::serve(listener, server::build_router(app))
        .await
        .context("server error")?;

    Ok(())
}
