//! Decision-tree evaluator for the serialized classifier artifact.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::features::FEATURE_COUNT;
use crate::model::CompatibilityModel;

/// One node of the serialized tree
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal split: `features[feature] <= threshold` descends left,
    /// otherwise right (sklearn split semantics).
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the predicted outcome label
    Leaf { label: String },
}

/// Pre-trained decision tree, deserialized from its JSON artifact.
///
/// Node 0 is the root. Validation at load time guarantees every split's
/// children point forward in the node array, so evaluation always terminates.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Loads and validates the tree from its JSON artifact
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact from {}", path.display()))?;
        let tree: DecisionTree = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid model artifact at {}", path.display()))?;
        tree.validate()
            .with_context(|| format!("Malformed tree in {}", path.display()))?;
        Ok(tree)
    }

    /// Builds a tree from in-memory nodes, validating the same invariants
    /// the artifact loader enforces
    pub fn from_nodes(nodes: Vec<Node>) -> anyhow::Result<Self> {
        let tree = Self { nodes };
        tree.validate()?;
        Ok(tree)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.nodes.is_empty() {
            anyhow::bail!("tree has no nodes");
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    anyhow::bail!(
                        "node {} splits on feature {} but the schema has {} columns",
                        index,
                        feature,
                        FEATURE_COUNT
                    );
                }
                for child in [left, right] {
                    if *child >= self.nodes.len() {
                        anyhow::bail!("node {} references missing child {}", index, child);
                    }
                    if *child <= index {
                        anyhow::bail!("node {} references backward child {}", index, child);
                    }
                }
            }
        }
        Ok(())
    }
}

impl CompatibilityModel for DecisionTree {
    fn predict(&self, features: &[f64]) -> AppResult<String> {
        if features.len() != FEATURE_COUNT {
            return Err(AppError::Inference(format!(
                "Feature row has {} columns, model expects {}",
                features.len(),
                FEATURE_COUNT
            )));
        }

        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { label } => return Ok(label.clone()),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "decision-tree"
    }
}
