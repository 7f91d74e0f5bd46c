use anyhow::Result;
use std::sync::Arc;
use tanzo_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tanzo_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting TANZO site preview");

    let config = config::Config::from_env()?;
    let catalog = config.load_catalog()?;
    info!("Loaded catalogs for {} locales", catalog.locales().len());

    let state = Arc::new(server::AppState { config, catalog });
    server::serve(state).await
}
