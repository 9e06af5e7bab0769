//! Trained-classifier boundary.
//!
//! The model is an opaque artifact produced by an offline training pipeline;
//! serving consumes it through the predict contract only. No retraining or
//! versioning happens here.

pub mod tree;

pub use tree::DecisionTree;

use crate::error::AppResult;

/// Predict contract for the pre-trained product-compatibility classifier.
///
/// Implementations take a feature row in the trained column order and return
/// the predicted outcome label.
pub trait CompatibilityModel: Send + Sync {
    /// Runs one inference call on an encoded feature row
    fn predict(&self, features: &[f64]) -> AppResult<String>;

    /// Model name for logging and debugging
    fn name(&self) -> &'static str;
}
