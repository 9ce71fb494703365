//! Skill normalization and multi-factor relevance scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod profile;
pub mod scoring;
pub mod taxonomy;

pub use config::{EngineConfig, ScoringWeights};
pub use error::{RelevanceError, Result};
pub use normalizer::{MatchType, NormalizedSkill, SkillNormalizer, SkillSet};
pub use profile::{CandidateProfile, JobRequirement};
pub use scoring::components::ExperienceFit;
pub use scoring::embedding::EmbeddingProvider;
pub use scoring::ranking::{rank, skill_gap, SkillGapEntry};
pub use scoring::scorer::{RelevanceEngine, RelevanceResult};
pub use scoring::{ComponentKind, ComponentScore};
pub use taxonomy::{SkillCategory, Taxonomy, TaxonomyEntry};
