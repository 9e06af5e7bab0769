//! One-hot expansion and column-order alignment.
//!
//! The classifier consumes a fixed 41-column row: the product-side feature
//! columns, the survey one-hots in vocabulary order, and the label-encoded
//! link key last. Positions are frozen by training and must never depend on
//! the input.

use crate::error::{AppError, AppResult};
use crate::features::vocab::{
    question, DegreeOfConcern, FragrancePreference, Sensitivity, SkinConcern, SkinType,
};
use crate::models::{Answers, ProductFeatures};

/// Number of model inputs
pub const FEATURE_COUNT: usize = 41;

/// The trained column order, link key last
pub const COLUMN_ORDER: [&str; FEATURE_COUNT] = [
    "normal_P",
    "dry_P",
    "oily_P",
    "combination_P",
    "Dryness",
    "Dullness",
    "Oiliness",
    "Acne",
    "Aging",
    "Pores",
    "Uneven texture",
    "Uneven skin tone",
    "Redness",
    "Dark spots",
    "Skin_Type_C_Combination",
    "Skin_Type_C_Dry",
    "Skin_Type_C_Normal",
    "Skin_Type_C_Oily",
    "Skin_Concern_C_Acne",
    "Skin_Concern_C_Aging",
    "Skin_Concern_C_Dark Spots",
    "Skin_Concern_C_Dryness",
    "Skin_Concern_C_Dullness",
    "Skin_Concern_C_Oiliness",
    "Skin_Concern_C_Pores",
    "Skin_Concern_C_Redness",
    "Skin_Concern_C_Uneven skin tone",
    "Skin_Concern_C_Uneven texture",
    "Degree_of_Concern_C_Medium",
    "Degree_of_Concern_C_Mild",
    "Degree_of_Concern_C_Severe",
    "Fragrance_Preference_C_Doesn\u{2019}t care",
    "Fragrance_Preference_C_No fragrance",
    "Fragrance_Preference_C_Yes fragrance",
    "Sensitivity_C_No",
    "Sensitivity_C_Yes",
    "fragrance_P_No fragrance",
    "fragrance_P_Yes fragrance",
    "Good for Sensitive Skin_P_No",
    "Good for Sensitive Skin_P_Yes",
    "Product Link Encoded",
];

/// The five categorical survey fields, parsed to canonical categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyProfile {
    pub skin_type: SkinType,
    pub concern: SkinConcern,
    pub degree: DegreeOfConcern,
    pub fragrance: FragrancePreference,
    pub sensitivity: Sensitivity,
}

impl SurveyProfile {
    /// Parses the raw survey answers into canonical categories.
    ///
    /// Every field is required; a missing or blank answer is rejected with
    /// the question named, an unrecognized one bubbles up from the
    /// vocabulary parsers.
    pub fn from_answers(answers: &Answers) -> AppResult<Self> {
        let field = |q: &str| {
            answers
                .first(q)
                .ok_or_else(|| AppError::InvalidInput(format!("Missing answer for '{}'", q)))
        };

        Ok(Self {
            skin_type: SkinType::parse(field(question::SKIN_TYPE)?)?,
            concern: SkinConcern::parse(field(question::SKIN_CONCERN)?)?,
            degree: DegreeOfConcern::parse(field(question::DEGREE_OF_CONCERN)?)?,
            fragrance: FragrancePreference::parse(field(question::FRAGRANCE)?)?,
            sensitivity: Sensitivity::parse(field(question::SENSITIVITY)?)?,
        })
    }
}

fn one_hot<T: PartialEq + Copy>(row: &mut Vec<f64>, all: &[T], selected: T) {
    for candidate in all {
        row.push(if *candidate == selected { 1.0 } else { 0.0 });
    }
}

/// Builds the model input row in trained column order.
///
/// Pure function: product-side columns first, then the survey one-hots
/// (exactly one hot bit per vocabulary), then the label-encoded link key.
pub fn feature_row(profile: &SurveyProfile, product: &ProductFeatures, link_code: i64) -> Vec<f64> {
    let mut row = Vec::with_capacity(FEATURE_COUNT);

    row.extend_from_slice(&[
        product.normal,
        product.dry,
        product.oily,
        product.combination,
        product.dryness,
        product.dullness,
        product.oiliness,
        product.acne,
        product.aging,
        product.pores,
        product.uneven_texture,
        product.uneven_skin_tone,
        product.redness,
        product.dark_spots,
    ]);

    one_hot(&mut row, &SkinType::ALL, profile.skin_type);
    one_hot(&mut row, &SkinConcern::ALL, profile.concern);
    one_hot(&mut row, &DegreeOfConcern::ALL, profile.degree);
    one_hot(&mut row, &FragrancePreference::ALL, profile.fragrance);
    one_hot(&mut row, &Sensitivity::ALL, profile.sensitivity);

    row.extend_from_slice(&[
        product.no_fragrance,
        product.yes_fragrance,
        product.sensitive_skin_no,
        product.sensitive_skin_yes,
    ]);

    row.push(link_code as f64);

    debug_assert_eq!(row.len(), FEATURE_COUNT);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_answers() -> Answers {
        let mut map = HashMap::new();
        map.insert(
            question::SKIN_TYPE.to_string(),
            vec!["Dry".to_string()],
        );
        map.insert(
            question::SKIN_CONCERN.to_string(),
            vec!["Acne/blemishes".to_string()],
        );
        map.insert(
            question::DEGREE_OF_CONCERN.to_string(),
            vec!["Severe".to_string()],
        );
        map.insert(
            question::FRAGRANCE.to_string(),
            vec!["Hate them".to_string()],
        );
        map.insert(
            question::SENSITIVITY.to_string(),
            vec!["Yes".to_string()],
        );
        Answers(map)
    }

    fn sample_product() -> ProductFeatures {
        ProductFeatures {
            link: "https://example.com/hydra-boost".to_string(),
            normal: 1.0,
            dry: 1.0,
            oily: 0.0,
            combination: 1.0,
            dryness: 1.0,
            dullness: 0.0,
            oiliness: 0.0,
            acne: 1.0,
            aging: 0.0,
            pores: 0.0,
            uneven_texture: 0.0,
            uneven_skin_tone: 0.0,
            redness: 0.0,
            dark_spots: 0.0,
            no_fragrance: 1.0,
            yes_fragrance: 0.0,
            sensitive_skin_no: 0.0,
            sensitive_skin_yes: 1.0,
            link_code: 7,
        }
    }

    #[test]
    fn test_column_order_is_complete() {
        assert_eq!(COLUMN_ORDER.len(), FEATURE_COUNT);
        assert_eq!(COLUMN_ORDER[0], "normal_P");
        assert_eq!(COLUMN_ORDER[FEATURE_COUNT - 1], "Product Link Encoded");
    }

    #[test]
    fn test_profile_from_answers() {
        let profile = SurveyProfile::from_answers(&sample_answers()).unwrap();
        assert_eq!(profile.skin_type, SkinType::Dry);
        assert_eq!(profile.concern, SkinConcern::Acne);
        assert_eq!(profile.degree, DegreeOfConcern::Severe);
        assert_eq!(profile.fragrance, FragrancePreference::NoFragrance);
        assert_eq!(profile.sensitivity, Sensitivity::Yes);
    }

    #[test]
    fn test_profile_rejects_missing_answer() {
        let mut answers = sample_answers();
        answers.0.remove(question::DEGREE_OF_CONCERN);
        let err = SurveyProfile::from_answers(&answers).unwrap_err();
        assert!(err.to_string().contains("How severe is this"));
    }

    #[test]
    fn test_feature_row_length_and_link_key() {
        let profile = SurveyProfile::from_answers(&sample_answers()).unwrap();
        let row = feature_row(&profile, &sample_product(), 7);
        assert_eq!(row.len(), FEATURE_COUNT);
        assert_eq!(row[FEATURE_COUNT - 1], 7.0);
    }

    #[test]
    fn test_feature_row_one_hot_positions() {
        let profile = SurveyProfile::from_answers(&sample_answers()).unwrap();
        let row = feature_row(&profile, &sample_product(), 7);

        let position = |column: &str| {
            COLUMN_ORDER
                .iter()
                .position(|c| *c == column)
                .expect("column present")
        };

        assert_eq!(row[position("Skin_Type_C_Dry")], 1.0);
        assert_eq!(row[position("Skin_Type_C_Oily")], 0.0);
        assert_eq!(row[position("Skin_Concern_C_Acne")], 1.0);
        assert_eq!(row[position("Degree_of_Concern_C_Severe")], 1.0);
        assert_eq!(row[position("Fragrance_Preference_C_No fragrance")], 1.0);
        assert_eq!(row[position("Sensitivity_C_Yes")], 1.0);
        assert_eq!(row[position("Sensitivity_C_No")], 0.0);
    }

    #[test]
    fn test_feature_row_exactly_one_hot_per_vocabulary() {
        let profile = SurveyProfile::from_answers(&sample_answers()).unwrap();
        let row = feature_row(&profile, &sample_product(), 7);

        // Survey one-hot block spans columns 14..36
        let skin_type: f64 = row[14..18].iter().sum();
        let concern: f64 = row[18..28].iter().sum();
        let degree: f64 = row[28..31].iter().sum();
        let fragrance: f64 = row[31..34].iter().sum();
        let sensitivity: f64 = row[34..36].iter().sum();

        assert_eq!(skin_type, 1.0);
        assert_eq!(concern, 1.0);
        assert_eq!(degree, 1.0);
        assert_eq!(fragrance, 1.0);
        assert_eq!(sensitivity, 1.0);
    }

    #[test]
    fn test_feature_row_carries_product_columns() {
        let profile = SurveyProfile::from_answers(&sample_answers()).unwrap();
        let product = sample_product();
        let row = feature_row(&profile, &product, product.link_code);
        assert_eq!(row[0], product.normal);
        assert_eq!(row[7], product.acne);
        assert_eq!(row[39], product.sensitive_skin_yes);
    }
}
