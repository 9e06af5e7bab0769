use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw survey answers: question text mapped to the selected options.
///
/// The survey frontend sends every field as a list even for single-select
/// questions; the first entry is the one that counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(pub HashMap<String, Vec<String>>);

impl Answers {
    /// Returns the first non-empty option selected for a question, if any
    pub fn first(&self, question: &str) -> Option<&str> {
        self.0
            .get(question)
            .and_then(|options| options.first())
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Body of `POST /api/survey`
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRequest {
    pub product_name: Option<String>,
    pub brand_name: Option<String>,
    pub answers: Option<Answers>,
}

/// Response to a processed survey
#[derive(Debug, Clone, Serialize)]
pub struct SurveyResponse {
    pub product_name: String,
    pub brand_name: String,
    pub questions_answers: Answers,
    pub product_link: String,
    pub results: String,
}

/// One recorded survey interaction, appended to the flat-file log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub product_name: String,
    pub brand_name: String,
    pub questions_answers: Answers,
    pub product_link: String,
    pub results: String,
}

impl SurveyRecord {
    /// Snapshots a response into a log record
    pub fn from_response(response: &SurveyResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            product_name: response.product_name.clone(),
            brand_name: response.brand_name.clone(),
            questions_answers: response.questions_answers.clone(),
            product_link: response.product_link.clone(),
            results: response.results.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_first_takes_leading_option() {
        let mut map = HashMap::new();
        map.insert(
            "What is your skin type?".to_string(),
            vec!["Dry".to_string(), "Oily".to_string()],
        );
        let answers = Answers(map);
        assert_eq!(answers.first("What is your skin type?"), Some("Dry"));
    }

    #[test]
    fn test_answers_first_ignores_blank_option() {
        let mut map = HashMap::new();
        map.insert("How severe is this".to_string(), vec!["  ".to_string()]);
        let answers = Answers(map);
        assert_eq!(answers.first("How severe is this"), None);
        assert_eq!(answers.first("missing question"), None);
    }

    #[test]
    fn test_record_snapshots_response() {
        let response = SurveyResponse {
            product_name: "Hydra Boost Gel".to_string(),
            brand_name: "Neutrogena".to_string(),
            questions_answers: Answers::default(),
            product_link: "https://example.com/hydra-boost".to_string(),
            results: "compatible".to_string(),
        };
        let record = SurveyRecord::from_response(&response);
        assert_eq!(record.product_name, response.product_name);
        assert_eq!(record.results, "compatible");
    }
}
