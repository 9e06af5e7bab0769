use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the product reference table (name, brand, link)
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Path to the encoded product feature table the model was trained against
    #[serde(default = "default_product_features_path")]
    pub product_features_path: String,

    /// Path to the serialized product-link label encoder
    #[serde(default = "default_link_encoder_path")]
    pub link_encoder_path: String,

    /// Path to the serialized decision tree artifact
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Path to the flat-file survey interaction log
    #[serde(default = "default_survey_log_path")]
    pub survey_log_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_products_path() -> String {
    "data/products.json".to_string()
}

fn default_product_features_path() -> String {
    "data/product_features.json".to_string()
}

fn default_link_encoder_path() -> String {
    "model/link_encoder.json".to_string()
}

fn default_model_path() -> String {
    "model/decision_tree.json".to_string()
}

fn default_survey_log_path() -> String {
    "data/survey_log.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
