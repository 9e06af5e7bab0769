use std::sync::Arc;

use crate::features::LinkEncoder;
use crate::model::CompatibilityModel;
use crate::store::{FeatureTable, ProductCatalog, SurveyStore};

/// Shared application state
///
/// Reference data and the model are loaded once at startup and never mutated;
/// the survey store serializes its own writes.
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
    pub features: Arc<FeatureTable>,
    pub link_encoder: Arc<LinkEncoder>,
    pub model: Arc<dyn CompatibilityModel>,
    pub store: Arc<dyn SurveyStore>,
}
