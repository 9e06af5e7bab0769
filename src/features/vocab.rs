//! Fixed category vocabularies the classifier was trained on.
//!
//! Each enum lists its variants in trained one-hot column order, carries the
//! exact trained category label, and knows how to parse the raw survey answer
//! text for its field (trimmed, case-insensitive, including the survey's
//! long-form option aliases).

use crate::error::{AppError, AppResult};

/// Survey question keys, exactly as the survey frontend sends them
pub mod question {
    pub const SKIN_TYPE: &str = "What is your skin type?";
    pub const SKIN_CONCERN: &str =
        "What is the primary skin concern you are hoping to address with this product?(Select One)";
    pub const DEGREE_OF_CONCERN: &str = "How severe is this";
    pub const FRAGRANCE: &str = "How do you feel about fragrances?";
    pub const SENSITIVITY: &str = "Does your skin react poorly to new products?";
}

fn unknown(question: &str, answer: &str) -> AppError {
    AppError::UnknownAnswer {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// `Skin_Type_C` vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinType {
    Combination,
    Dry,
    Normal,
    Oily,
}

impl SkinType {
    /// One-hot column order: `Skin_Type_C_{Combination,Dry,Normal,Oily}`
    pub const ALL: [SkinType; 4] = [
        SkinType::Combination,
        SkinType::Dry,
        SkinType::Normal,
        SkinType::Oily,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Combination => "Combination",
            SkinType::Dry => "Dry",
            SkinType::Normal => "Normal",
            SkinType::Oily => "Oily",
        }
    }

    pub fn parse(answer: &str) -> AppResult<Self> {
        match answer.trim().to_lowercase().as_str() {
            "combination" => Ok(SkinType::Combination),
            "dry" => Ok(SkinType::Dry),
            "normal" => Ok(SkinType::Normal),
            "oily" => Ok(SkinType::Oily),
            _ => Err(unknown(question::SKIN_TYPE, answer)),
        }
    }
}

/// `Skin_Concern_C` vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinConcern {
    Acne,
    Aging,
    DarkSpots,
    Dryness,
    Dullness,
    Oiliness,
    Pores,
    Redness,
    UnevenSkinTone,
    UnevenTexture,
}

impl SkinConcern {
    /// One-hot column order: `Skin_Concern_C_{Acne,…,Uneven texture}`
    pub const ALL: [SkinConcern; 10] = [
        SkinConcern::Acne,
        SkinConcern::Aging,
        SkinConcern::DarkSpots,
        SkinConcern::Dryness,
        SkinConcern::Dullness,
        SkinConcern::Oiliness,
        SkinConcern::Pores,
        SkinConcern::Redness,
        SkinConcern::UnevenSkinTone,
        SkinConcern::UnevenTexture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinConcern::Acne => "Acne",
            SkinConcern::Aging => "Aging",
            SkinConcern::DarkSpots => "Dark Spots",
            SkinConcern::Dryness => "Dryness",
            SkinConcern::Dullness => "Dullness",
            SkinConcern::Oiliness => "Oiliness",
            SkinConcern::Pores => "Pores",
            SkinConcern::Redness => "Redness",
            SkinConcern::UnevenSkinTone => "Uneven skin tone",
            SkinConcern::UnevenTexture => "Uneven texture",
        }
    }

    /// Parses either the canonical category label or the survey's long-form
    /// option text (e.g. "Acne/blemishes").
    pub fn parse(answer: &str) -> AppResult<Self> {
        match answer.trim().to_lowercase().as_str() {
            "acne" | "acne/blemishes" => Ok(SkinConcern::Acne),
            "aging" | "aging (fine lines/wrinkles, loss of firmness/elasticity)" => {
                Ok(SkinConcern::Aging)
            }
            "dark spots" | "hyperpigmentation/dark spots" => Ok(SkinConcern::DarkSpots),
            "dryness" => Ok(SkinConcern::Dryness),
            "dullness" => Ok(SkinConcern::Dullness),
            "oiliness" => Ok(SkinConcern::Oiliness),
            "pores" => Ok(SkinConcern::Pores),
            "redness" => Ok(SkinConcern::Redness),
            "uneven skin tone" => Ok(SkinConcern::UnevenSkinTone),
            "uneven texture" => Ok(SkinConcern::UnevenTexture),
            _ => Err(unknown(question::SKIN_CONCERN, answer)),
        }
    }
}

/// `Degree_of_Concern_C` vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeOfConcern {
    Medium,
    Mild,
    Severe,
}

impl DegreeOfConcern {
    /// One-hot column order: `Degree_of_Concern_C_{Medium,Mild,Severe}`
    pub const ALL: [DegreeOfConcern; 3] = [
        DegreeOfConcern::Medium,
        DegreeOfConcern::Mild,
        DegreeOfConcern::Severe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DegreeOfConcern::Medium => "Medium",
            DegreeOfConcern::Mild => "Mild",
            DegreeOfConcern::Severe => "Severe",
        }
    }

    pub fn parse(answer: &str) -> AppResult<Self> {
        match answer.trim().to_lowercase().as_str() {
            "medium" => Ok(DegreeOfConcern::Medium),
            "mild" => Ok(DegreeOfConcern::Mild),
            "severe" => Ok(DegreeOfConcern::Severe),
            _ => Err(unknown(question::DEGREE_OF_CONCERN, answer)),
        }
    }
}

/// `Fragrance_Preference_C` vocabulary
///
/// The trained "doesn't care" column label carries a typographic apostrophe
/// (U+2019); `label()` reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragrancePreference {
    DoesntCare,
    NoFragrance,
    YesFragrance,
}

impl FragrancePreference {
    /// One-hot column order:
    /// `Fragrance_Preference_C_{Doesn’t care,No fragrance,Yes fragrance}`
    pub const ALL: [FragrancePreference; 3] = [
        FragrancePreference::DoesntCare,
        FragrancePreference::NoFragrance,
        FragrancePreference::YesFragrance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FragrancePreference::DoesntCare => "Doesn\u{2019}t care",
            FragrancePreference::NoFragrance => "No fragrance",
            FragrancePreference::YesFragrance => "Yes fragrance",
        }
    }

    /// Parses the survey's sentiment options ("Hate them" / "Love them" /
    /// "Don't care") as well as the canonical category labels.
    pub fn parse(answer: &str) -> AppResult<Self> {
        // Normalize the typographic apostrophe before matching
        let normalized = answer.trim().to_lowercase().replace('\u{2019}', "'");
        match normalized.as_str() {
            "hate them" | "no fragrance" => Ok(FragrancePreference::NoFragrance),
            "love them" | "yes fragrance" => Ok(FragrancePreference::YesFragrance),
            "don't care" | "doesn't care" => Ok(FragrancePreference::DoesntCare),
            _ => Err(unknown(question::FRAGRANCE, answer)),
        }
    }
}

/// `Sensitivity_C` vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    No,
    Yes,
}

impl Sensitivity {
    /// One-hot column order: `Sensitivity_C_{No,Yes}`
    pub const ALL: [Sensitivity; 2] = [Sensitivity::No, Sensitivity::Yes];

    pub fn label(&self) -> &'static str {
        match self {
            Sensitivity::No => "No",
            Sensitivity::Yes => "Yes",
        }
    }

    pub fn parse(answer: &str) -> AppResult<Self> {
        match answer.trim().to_lowercase().as_str() {
            "no" => Ok(Sensitivity::No),
            "yes" => Ok(Sensitivity::Yes),
            _ => Err(unknown(question::SENSITIVITY, answer)),
        }
    }
}
