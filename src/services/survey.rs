//! Survey processing: resolve the product, encode the features, run the
//! classifier, record the interaction.

use crate::error::{AppError, AppResult};
use crate::features::{feature_row, SurveyProfile};
use crate::models::{Answers, SurveyRecord, SurveyResponse};
use crate::state::AppState;

/// Processes one survey submission end to end.
///
/// Recording the interaction is best-effort: a log failure is reported at
/// warn but never fails a request the model already answered.
pub async fn process_survey(
    state: &AppState,
    product_name: String,
    brand_name: String,
    answers: Answers,
) -> AppResult<SurveyResponse> {
    let product = state
        .catalog
        .find(&product_name, &brand_name)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Product '{}' by '{}' not found",
                product_name, brand_name
            ))
        })?;

    let profile = SurveyProfile::from_answers(&answers)?;
    let link_code = state.link_encoder.encode(&product.link)?;
    let features = state.features.find(link_code).ok_or_else(|| {
        AppError::Inference(format!(
            "No trained feature row for product link '{}'",
            product.link
        ))
    })?;

    let row = feature_row(&profile, features, link_code);
    let results = state.model.predict(&row)?;

    tracing::info!(
        model = state.model.name(),
        product = %product_name,
        brand = %brand_name,
        results = %results,
        "Survey scored"
    );

    let response = SurveyResponse {
        product_name,
        brand_name,
        questions_answers: answers,
        product_link: product.link.clone(),
        results,
    };

    let record = SurveyRecord::from_response(&response);
    if let Err(e) = state.store.append(&record).await {
        tracing::warn!(error = %e, record_id = %record.id, "Failed to record survey interaction");
    }

    Ok(response)
}
