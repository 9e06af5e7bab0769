use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ProductCheckResponse {
    pub message: String,
    pub product: Product,
}

/// Handler for the product existence check
pub async fn check_product(
    State(state): State<Arc<AppState>>,
    Path((product_name, brand_name)): Path<(String, String)>,
) -> AppResult<Json<ProductCheckResponse>> {
    let product = state
        .catalog
        .find(&product_name, &brand_name)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductCheckResponse {
        message: "Product found".to_string(),
        product,
    }))
}
