pub mod products;
pub mod survey_log;

pub use products::{FeatureTable, ProductCatalog};
pub use survey_log::{JsonSurveyStore, SurveyStore};
