use serde::{Deserialize, Serialize};

/// One row of the product reference table
///
/// Field names mirror the reference file's column spelling so the JSON stays
/// interchangeable with the catalog the merchandising team maintains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Brand Name")]
    pub brand: String,
    #[serde(rename = "Product Link")]
    pub link: String,
}

impl Product {
    /// Case-insensitive match on product and brand name.
    ///
    /// Full Unicode lowercasing: catalog entries carry accented brand names.
    pub fn matches(&self, name: &str, brand: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.brand.to_lowercase() == brand.to_lowercase()
    }
}

/// One row of the encoded product feature table the classifier was trained
/// against, keyed by the label-encoded product link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFeatures {
    #[serde(rename = "product link")]
    pub link: String,
    #[serde(rename = "normal_P")]
    pub normal: f64,
    #[serde(rename = "dry_P")]
    pub dry: f64,
    #[serde(rename = "oily_P")]
    pub oily: f64,
    #[serde(rename = "combination_P")]
    pub combination: f64,
    #[serde(rename = "Dryness")]
    pub dryness: f64,
    #[serde(rename = "Dullness")]
    pub dullness: f64,
    #[serde(rename = "Oiliness")]
    pub oiliness: f64,
    #[serde(rename = "Acne")]
    pub acne: f64,
    #[serde(rename = "Aging")]
    pub aging: f64,
    #[serde(rename = "Pores")]
    pub pores: f64,
    #[serde(rename = "Uneven texture")]
    pub uneven_texture: f64,
    #[serde(rename = "Uneven skin tone")]
    pub uneven_skin_tone: f64,
    #[serde(rename = "Redness")]
    pub redness: f64,
    #[serde(rename = "Dark spots")]
    pub dark_spots: f64,
    #[serde(rename = "fragrance_P_No fragrance")]
    pub no_fragrance: f64,
    #[serde(rename = "fragrance_P_Yes fragrance")]
    pub yes_fragrance: f64,
    #[serde(rename = "Good for Sensitive Skin_P_No")]
    pub sensitive_skin_no: f64,
    #[serde(rename = "Good for Sensitive Skin_P_Yes")]
    pub sensitive_skin_yes: f64,
    #[serde(rename = "Product Link Encoded")]
    pub link_code: i64,
}
