use std::sync::Arc;

use skinmatch_api::{
    config::Config,
    features::LinkEncoder,
    model::DecisionTree,
    routes::create_router,
    state::AppState,
    store::{FeatureTable, JsonSurveyStore, ProductCatalog},
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState {
        catalog: Arc::new(ProductCatalog::load(&config.products_path)?),
        features: Arc::new(FeatureTable::load(&config.product_features_path)?),
        link_encoder: Arc::new(LinkEncoder::load(&config.link_encoder_path)?),
        model: Arc::new(DecisionTree::load(&config.model_path)?),
        store: Arc::new(JsonSurveyStore::new(config.survey_log_path.clone())),
    });

    let app = create_router(state)
        // Survey widget is embedded on third-party storefronts
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
