//! Composite relevance scoring for one candidate against one job

use crate::config::EngineConfig;
use crate::error::Result;
use crate::normalizer::{SkillNormalizer, SkillSet};
use crate::profile::{CandidateProfile, JobRequirement};
use crate::scoring::components::{
    category_similarity, certification_match, experience_fit, skill_match, ExperienceFit,
};
use crate::scoring::embedding::{cosine_similarity, embed_with_timeout, EmbeddingProvider};
use crate::scoring::lexical::TextAnalyzer;
use crate::scoring::{ComponentKind, ComponentScore};
use crate::taxonomy::Taxonomy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// A scored candidate/job pairing with its full component breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceResult {
    /// Weighted composite score in [0, 1].
    pub overall_score: f64,
    /// Per-component breakdown, always in `ComponentKind` declaration order.
    pub components: Vec<ComponentScore>,
    /// Canonical job skills the candidate also has, in job declaration order.
    pub matched_skills: Vec<String>,
    /// Canonical required skills the candidate lacks, in job declaration order.
    pub missing_skills: Vec<String>,
    /// Required certifications the candidate does not hold.
    pub certification_gaps: Vec<String>,
    pub experience_fit: ExperienceFit,
    /// True when the semantic component was skipped and its weight
    /// redistributed across the remaining components.
    pub degraded: bool,
    /// Position of the candidate in the batch that produced this result.
    pub candidate_index: usize,
    pub evaluated_at: DateTime<Utc>,
}

impl RelevanceResult {
    /// Raw score for one component, if it was active in this evaluation.
    pub fn component_raw(&self, kind: ComponentKind) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.component == kind)
            .map(|c| c.raw)
    }
}

/// The scoring engine: taxonomy, normalizer, lexical analyzer, and an
/// optional embedding provider behind one evaluation entry point.
pub struct RelevanceEngine {
    taxonomy: Arc<Taxonomy>,
    normalizer: SkillNormalizer,
    analyzer: TextAnalyzer,
    config: EngineConfig,
    provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl RelevanceEngine {
    /// Build an engine over the given taxonomy. Fails if the configuration
    /// is invalid; a constructed engine can always score.
    pub fn new(config: EngineConfig, taxonomy: Arc<Taxonomy>) -> Result<Self> {
        config.validate()?;
        let normalizer = SkillNormalizer::new(Arc::clone(&taxonomy), config.min_similarity);
        Ok(Self {
            taxonomy,
            normalizer,
            analyzer: TextAnalyzer::new(),
            config,
            provider: None,
        })
    }

    /// Attach a dense embedding backend for the semantic component.
    pub fn with_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize raw skill strings without scoring anything.
    pub fn normalize_skills(&self, raws: &[String]) -> SkillSet {
        self.normalizer.normalize_list(raws)
    }

    /// Score one candidate against one job.
    ///
    /// Embedding failures and timeouts never fail the evaluation; the
    /// semantic component is dropped, the remaining weights are rescaled to
    /// sum to 1.0, and the result is flagged as degraded.
    pub async fn evaluate(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<RelevanceResult> {
        candidate.validate()?;
        job.validate()?;

        let candidate_skills = self.normalizer.normalize_list(&candidate.skills);
        let required_skills = self.normalizer.normalize_list(&job.required_skills);
        let job_skills = {
            let mut all = job.required_skills.clone();
            all.extend(job.preferred_skills.iter().cloned());
            self.normalizer.normalize_list(&all)
        };

        let candidate_certs = self
            .normalizer
            .normalize_certifications(&candidate.certifications);
        let job_certs = self
            .normalizer
            .normalize_certifications(&job.required_certifications);

        let semantic = self
            .semantic_similarity(&candidate.resume_text, &job.description)
            .await;
        let degraded = semantic.is_none() && self.config.weights.semantic_similarity > 0.0;

        let (experience_score, fit_label) = experience_fit(
            candidate.years_experience,
            job.min_years_experience,
            job.preferred_years_experience,
            job.seniority_level.as_deref(),
        );

        let raw = |kind: ComponentKind| -> Option<f64> {
            match kind {
                ComponentKind::SkillMatch => Some(skill_match(&candidate_skills, &job_skills)),
                ComponentKind::CategorySimilarity => {
                    Some(category_similarity(&candidate_skills, &job_skills))
                }
                ComponentKind::TextSimilarity => Some(
                    self.analyzer
                        .text_similarity(&candidate.resume_text, &job.description),
                ),
                ComponentKind::SemanticSimilarity => semantic,
                ComponentKind::CertificationMatch => {
                    Some(certification_match(&candidate_certs, &job_certs))
                }
                ComponentKind::ExperienceRelevance => Some(experience_score),
            }
        };

        // Weight mass of the components that actually ran; absent components
        // give their share back proportionally.
        let active_weight: f64 = ComponentKind::ALL
            .iter()
            .filter(|kind| raw(**kind).is_some())
            .map(|kind| self.weight_of(*kind))
            .sum();

        let mut components = Vec::with_capacity(ComponentKind::ALL.len());
        for kind in ComponentKind::ALL {
            if let Some(value) = raw(kind) {
                let weight = if active_weight > 0.0 {
                    self.weight_of(kind) / active_weight
                } else {
                    0.0
                };
                components.push(ComponentScore::new(kind, value, weight));
            }
        }

        let overall_score = components
            .iter()
            .map(|c| c.weighted)
            .sum::<f64>()
            .clamp(0.0, 1.0);

        let matched_skills = intersection_in_order(&job_skills, &candidate_skills);
        let missing_skills = difference_in_order(&required_skills, &candidate_skills);
        let certification_gaps = certification_gaps(&self.normalizer, job, &candidate_certs);

        Ok(RelevanceResult {
            overall_score,
            components,
            matched_skills,
            missing_skills,
            certification_gaps,
            experience_fit: fit_label,
            degraded,
            candidate_index: 0,
            evaluated_at: Utc::now(),
        })
    }

    fn weight_of(&self, kind: ComponentKind) -> f64 {
        let w = &self.config.weights;
        match kind {
            ComponentKind::SkillMatch => w.skill_match,
            ComponentKind::CategorySimilarity => w.category_similarity,
            ComponentKind::TextSimilarity => w.text_similarity,
            ComponentKind::SemanticSimilarity => w.semantic_similarity,
            ComponentKind::CertificationMatch => w.certification_match,
            ComponentKind::ExperienceRelevance => w.experience_relevance,
        }
    }

    /// Dense similarity between the two texts, or `None` when no provider is
    /// configured, either text is empty, or the provider fails or times out.
    async fn semantic_similarity(&self, resume_text: &str, description: &str) -> Option<f64> {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => {
                log::debug!("no embedding provider configured, skipping semantic component");
                return None;
            }
        };
        if resume_text.trim().is_empty() || description.trim().is_empty() {
            return None;
        }

        let timeout_ms = self.config.embedding_timeout_ms;
        let resume_vec = match embed_with_timeout(provider.as_ref(), resume_text, timeout_ms).await
        {
            Ok(vector) => vector,
            Err(e) => {
                log::warn!("embedding failed, degrading to lexical components: {}", e);
                return None;
            }
        };
        let job_vec = match embed_with_timeout(provider.as_ref(), description, timeout_ms).await {
            Ok(vector) => vector,
            Err(e) => {
                log::warn!("embedding failed, degrading to lexical components: {}", e);
                return None;
            }
        };

        match cosine_similarity(&resume_vec, &job_vec) {
            Ok(score) => Some(score),
            Err(e) => {
                log::warn!("embedding similarity failed: {}", e);
                None
            }
        }
    }
}

/// Canonical names from `reference` that also appear in `candidate`, in
/// `reference` iteration (insertion) order.
fn intersection_in_order(reference: &SkillSet, candidate: &SkillSet) -> Vec<String> {
    reference
        .iter()
        .filter(|skill| candidate.contains(&skill.canonical))
        .map(|skill| skill.canonical.clone())
        .collect()
}

/// Canonical names from `reference` missing from `candidate`, in
/// `reference` iteration order.
fn difference_in_order(reference: &SkillSet, candidate: &SkillSet) -> Vec<String> {
    reference
        .iter()
        .filter(|skill| !candidate.contains(&skill.canonical))
        .map(|skill| skill.canonical.clone())
        .collect()
}

/// Required certifications (canonical form) the candidate does not hold,
/// in job declaration order, deduplicated.
fn certification_gaps(
    normalizer: &SkillNormalizer,
    job: &JobRequirement,
    candidate_certs: &BTreeSet<String>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut gaps = Vec::new();
    for raw in &job.required_certifications {
        let (canonical, _) = normalizer.normalize_certification(raw);
        let key = crate::taxonomy::normalize_key(&canonical);
        if key.is_empty() || candidate_certs.contains(&key) {
            continue;
        }
        if seen.insert(key) {
            gaps.push(canonical);
        }
    }
    gaps
}

// Re-exported for ranking's tie-break on the raw skill-match component.
pub(crate) fn raw_skill_match(result: &RelevanceResult) -> f64 {
    result
        .component_raw(ComponentKind::SkillMatch)
        .unwrap_or(0.0)
}
