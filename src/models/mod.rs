mod product;
mod survey;

pub use product::{Product, ProductFeatures};
pub use survey::{Answers, SurveyRecord, SurveyRequest, SurveyResponse};
