use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::Config;
use activity_signup::database::{ActivityStore, InMemoryActivityDirectory};
use activity_signup::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    // Signups live only as long as this process.
    let store: Arc<dyn ActivityStore> = Arc::new(InMemoryActivityDirectory::seeded());
    let app = web::app(store, &config.static_dir);

    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}; trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr().context("listener has no local address")?;
    info!("activity signup service listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .await
        .context("server exited with an error")
}
