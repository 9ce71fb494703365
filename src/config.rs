//! Engine configuration: component weights and matching thresholds

use crate::error::{RelevanceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    /// Minimum similarity for a fuzzy normalization match.
    pub min_similarity: f64,
    /// Timeout for a single embedding-provider call, in milliseconds.
    pub embedding_timeout_ms: u64,
}

/// Per-component weights. Must be non-negative and sum to 1.0; validated at
/// engine construction so an invalid configuration can never produce a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub category_similarity: f64,
    pub text_similarity: f64,
    pub semantic_similarity: f64,
    pub certification_match: f64,
    pub experience_relevance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.25,
            category_similarity: 0.15,
            text_similarity: 0.15,
            semantic_similarity: 0.25,
            certification_match: 0.10,
            experience_relevance: 0.10,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_similarity: 0.7,
            embedding_timeout_ms: 5_000,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(RelevanceError::Configuration(format!(
                    "weight `{}` must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RelevanceError::Configuration(format!(
                "component weights must sum to 1.0, got {:.6}",
                sum
            )));
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }

    fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("skill_match", self.skill_match),
            ("category_similarity", self.category_similarity),
            ("text_similarity", self.text_similarity),
            ("semantic_similarity", self.semantic_similarity),
            ("certification_match", self.certification_match),
            ("experience_relevance", self.experience_relevance),
        ]
    }
}

impl EngineConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            RelevanceError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RelevanceError::Configuration(format!("failed to serialize: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.min_similarity.is_finite() || !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(RelevanceError::Configuration(format!(
                "min_similarity must be in [0, 1], got {}",
                self.min_similarity
            )));
        }
        if self.embedding_timeout_ms == 0 {
            return Err(RelevanceError::Configuration(
                "embedding_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
