use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{SurveyRequest, SurveyResponse},
    services::survey,
    state::AppState,
};

/// Handler for survey submission
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SurveyRequest>,
) -> AppResult<Json<SurveyResponse>> {
    let product_name = request
        .product_name
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing required field: product_name".to_string()))?;
    let brand_name = request
        .brand_name
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing required field: brand_name".to_string()))?;
    let answers = request
        .answers
        .filter(|a| !a.0.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing required field: answers".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        product = %product_name,
        brand = %brand_name,
        "Processing survey submission"
    );

    let response = survey::process_survey(&state, product_name, brand_name, answers).await?;

    tracing::info!(
        request_id = %request_id,
        results = %response.results,
        "Survey submission completed"
    );

    Ok(Json(response))
}
