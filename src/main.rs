use anyhow::Context;
use tracing_subscriber::EnvFilter;

use diet_rec_api::{
    api::{create_router, AppState, RecommendationSettings},
    config::Config,
    services::RecipeCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("diet_rec_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = RecipeCatalog::load(&config.dataset_path)
        .with_context(|| format!("Failed to load recipe dataset {}", config.dataset_path))?;

    if catalog.is_empty() {
        tracing::warn!(path = %config.dataset_path, "Recipe catalog is empty");
    }

    tracing::info!(
        recipes = catalog.len(),
        skipped = catalog.skipped_rows(),
        query_layout = ?config.query_layout,
        "Catalog ready"
    );

    let state = AppState::new(catalog, RecommendationSettings::from(&config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
