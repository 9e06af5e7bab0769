//! Link-key encoding.
//!
//! The training pipeline label-encoded the product link column; the persisted
//! mapping travels with the model artifacts so serving encodes the join key
//! exactly the way training did.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Persisted label-encoder mapping product link → integer code
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LinkEncoder {
    codes: HashMap<String, i64>,
}

impl LinkEncoder {
    /// Loads the encoder from its JSON artifact
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read link encoder from {}", path.display()))?;
        let encoder: LinkEncoder = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid link encoder artifact at {}", path.display()))?;
        Ok(encoder)
    }

    /// Builds an encoder from an in-memory mapping
    pub fn from_codes(codes: HashMap<String, i64>) -> Self {
        Self { codes }
    }

    /// Encodes a product link into its trained integer code.
    ///
    /// A link the encoder has never seen cannot be aligned with the trained
    /// schema, so it is an error rather than a sentinel code.
    pub fn encode(&self, link: &str) -> AppResult<i64> {
        self.codes.get(link).copied().ok_or_else(|| {
            AppError::Inference(format!("Product link '{}' is not in the trained vocabulary", link))
        })
    }
}
