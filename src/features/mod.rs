//! Feature-encoding pipeline
//!
//! Translates free-form survey answers into the exact categorical/one-hot
//! schema the classifier was trained on: answer text → canonical category →
//! one-hot columns → trained column order → label-encoded link key.

pub mod encode;
pub mod link;
pub mod vocab;

pub use encode::{feature_row, SurveyProfile, COLUMN_ORDER, FEATURE_COUNT};
pub use link::LinkEncoder;
