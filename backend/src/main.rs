use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config {
    pub mod site_config;
}
mod handlers {
    pub mod site_handlers;
}

use config::site_config::SiteConfig;
use handlers::site_handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SiteConfig::from_env().context("invalid site configuration")?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}, build the frontend with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let app = site_handlers::router(&config.dist_dir);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("Serving {} on http://{}", config.dist_dir.display(), config.addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
