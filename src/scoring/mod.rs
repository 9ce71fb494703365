//! Multi-factor relevance scoring: independent similarity components
//! combined into one weighted, explainable score.

pub mod components;
pub mod embedding;
pub mod lexical;
pub mod ranking;
pub mod scorer;

use serde::{Deserialize, Serialize};

/// The similarity components, in their fixed reporting order.
///
/// Declaration order is the order `ComponentScore`s appear in every
/// `RelevanceResult`, so output is diffable across runs and configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    SkillMatch,
    CategorySimilarity,
    TextSimilarity,
    SemanticSimilarity,
    CertificationMatch,
    ExperienceRelevance,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::SkillMatch,
        ComponentKind::CategorySimilarity,
        ComponentKind::TextSimilarity,
        ComponentKind::SemanticSimilarity,
        ComponentKind::CertificationMatch,
        ComponentKind::ExperienceRelevance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::SkillMatch => "skill_match",
            ComponentKind::CategorySimilarity => "category_similarity",
            ComponentKind::TextSimilarity => "text_similarity",
            ComponentKind::SemanticSimilarity => "semantic_similarity",
            ComponentKind::CertificationMatch => "certification_match",
            ComponentKind::ExperienceRelevance => "experience_relevance",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One component's contribution to the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component: ComponentKind,
    /// Raw component score in [0, 1].
    pub raw: f64,
    /// Effective weight after any renormalization.
    pub weight: f64,
    /// raw × weight.
    pub weighted: f64,
}

impl ComponentScore {
    pub fn new(component: ComponentKind, raw: f64, weight: f64) -> Self {
        let raw = raw.clamp(0.0, 1.0);
        Self {
            component,
            raw,
            weight,
            weighted: raw * weight,
        }
    }
}
