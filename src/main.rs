use anyhow::Context;
use tracing_subscriber::EnvFilter;

use city_match_api::{
    api::{create_router, AppState},
    catalog::Catalog,
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("city_match_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::load_from_file(&config.catalog_path)
        .with_context(|| format!("loading catalog from {}", config.catalog_path.display()))?;

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
