use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Text vectorizer: lowercased unigram counts over a fixed vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vectorizer {
    pub vocabulary: HashMap<String, usize>,
}

impl Vectorizer {
    /// Returns (feature index, count) pairs for the tokens the
    /// vocabulary knows about. Unknown tokens are dropped.
    pub fn transform(&self, text: &str) -> Vec<(usize, f32)> {
        let lower = text.to_lowercase();
        let mut counts: HashMap<usize, f32> = HashMap::new();

        for token in lower.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f32)> = counts.into_iter().collect();
        features.sort_unstable_by_key(|(index, _)| *index);
        features
    }
}

/// Trained multi-class linear model: one weight row and one intercept
/// per class, argmax over the class scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
}

/// Maps a numeric class index back to its emotion name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn inverse_transform(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(|s| s.as_str())
    }
}

/// Serialized model artifact: the three named objects inference needs.
/// Loaded once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub vectorizer: Vectorizer,
    pub model: LinearModel,
    pub label_encoder: LabelEncoder,
}

impl ModelBundle {
    /// Reads and deserializes the artifact. Shape consistency between the
    /// three members is deliberately not checked here; a structurally
    /// inconsistent bundle loads fine and fails at predict time.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        let bundle = serde_json::from_str(&data)
            .with_context(|| format!("parsing model artifact {}", path.display()))?;
        Ok(bundle)
    }

    /// Vectorize, score every class, take the argmax and decode it into
    /// the emotion name. Ties go to the lowest class index.
    pub fn predict(&self, text: &str) -> Result<String, ClassifierError> {
        let features = self.vectorizer.transform(text);

        let mut best: Option<(usize, f32)> = None;
        for (class_index, row) in self.model.weights.iter().enumerate() {
            let mut score = self
                .model
                .intercepts
                .get(class_index)
                .copied()
                .unwrap_or(0.0);

            for &(feature_index, value) in &features {
                let weight = row.get(feature_index).ok_or_else(|| {
                    ClassifierError::Inference(format!(
                        "feature index {} out of range for class {} ({} weights)",
                        feature_index,
                        class_index,
                        row.len()
                    ))
                })?;
                score += weight * value;
            }

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((class_index, score)),
            }
        }

        let (winner, _) = best
            .ok_or_else(|| ClassifierError::Inference("model has no classes".to_string()))?;

        self.label_encoder
            .inverse_transform(winner)
            .map(str::to_owned)
            .ok_or_else(|| {
                ClassifierError::Inference(format!(
                    "predicted class {} missing from label encoder ({} classes)",
                    winner,
                    self.label_encoder.classes.len()
                ))
            })
    }
}
