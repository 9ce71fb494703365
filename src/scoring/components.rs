//! Set-based and numeric similarity components.
//!
//! Every function here is pure and returns a score in [0, 1]; edge cases
//! (empty sets, zero requirements) are defined rather than erroring so the
//! composite scorer never has to special-case a component.

use crate::normalizer::SkillSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Jaccard similarity with the engine's empty-set convention:
/// 1.0 when both sets are empty, 0.0 when exactly one is.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    (intersection / union).clamp(0.0, 1.0)
}

/// Skill-set overlap on canonical names.
pub fn skill_match(candidate: &SkillSet, job: &SkillSet) -> f64 {
    jaccard(&candidate.canonical_keys(), &job.canonical_keys())
}

/// Coarser overlap on category labels; rewards domain-adjacent candidates
/// even without exact skill overlap.
pub fn category_similarity(candidate: &SkillSet, job: &SkillSet) -> f64 {
    jaccard(&candidate.categories(), &job.categories())
}

/// Fraction of job-required certifications the candidate holds.
/// A job requiring no certifications is fully satisfied.
pub fn certification_match(candidate: &BTreeSet<String>, job: &BTreeSet<String>) -> f64 {
    if job.is_empty() {
        return 1.0;
    }
    let matched = job.intersection(candidate).count() as f64;
    (matched / job.len() as f64).clamp(0.0, 1.0)
}

/// Human-readable label for how the candidate's experience compares to the
/// job's requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceFit {
    Exceeds,
    Meets,
    Partial,
    Below,
    NotSpecified,
}

impl std::fmt::Display for ExperienceFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExperienceFit::Exceeds => "exceeds",
            ExperienceFit::Meets => "meets",
            ExperienceFit::Partial => "partial",
            ExperienceFit::Below => "below",
            ExperienceFit::NotSpecified => "not_specified",
        };
        write!(f, "{}", label)
    }
}

/// Experience score and fit label.
///
/// Years component: 1.0 at or above the preferred level, linear partial
/// credit down to 0.0 at half the minimum, 0.0 below that. When the job
/// carries a seniority label, the years score is blended 70/30 with a
/// seniority-range match.
pub fn experience_fit(
    years: f64,
    min_years: f64,
    preferred_years: Option<f64>,
    seniority_level: Option<&str>,
) -> (f64, ExperienceFit) {
    if min_years <= 0.0 && preferred_years.is_none() {
        return (1.0, ExperienceFit::NotSpecified);
    }

    let preferred = preferred_years.unwrap_or(min_years).max(min_years);
    let floor = 0.5 * min_years;

    let years_score = if years >= preferred {
        1.0
    } else if years < floor {
        0.0
    } else if preferred > floor {
        (years - floor) / (preferred - floor)
    } else {
        1.0
    };

    let score = match seniority_level {
        Some(level) => 0.7 * years_score + 0.3 * seniority_match(years, level),
        None => years_score,
    };

    let label = if years >= preferred {
        ExperienceFit::Exceeds
    } else if years >= min_years {
        ExperienceFit::Meets
    } else if years >= floor {
        ExperienceFit::Partial
    } else {
        ExperienceFit::Below
    };

    (score.clamp(0.0, 1.0), label)
}

/// How well total years of experience fit a named seniority band.
/// Over-qualification is only mildly penalized; unknown labels are neutral.
pub fn seniority_match(years: f64, level: &str) -> f64 {
    let (min, max): (f64, f64) = match level.trim().to_lowercase().as_str() {
        "entry" => (0.0, 2.0),
        "junior" => (1.0, 3.0),
        "mid" | "mid-level" | "intermediate" => (3.0, 7.0),
        "senior" => (5.0, 10.0),
        "lead" => (7.0, 15.0),
        "principal" | "staff" => (10.0, 20.0),
        _ => return 0.5,
    };

    if years >= min && years <= max {
        1.0
    } else if years < min {
        if min > 0.0 {
            (years / min).clamp(0.0, 1.0)
        } else {
            0.0
        }
    } else {
        // Over-qualified: decay gently past the band's upper bound.
        (0.8 - 0.02 * (years - max)).clamp(0.5, 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::SkillNormalizer;
    use crate::taxonomy::Taxonomy;
    use std::sync::Arc;

    fn skill_set(skills: &[&str]) -> SkillSet {
        let normalizer = SkillNormalizer::new(Arc::new(Taxonomy::builtin()), 0.7);
        normalizer.normalize_list(&skills.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_skill_match_reflexive() {
        let set = skill_set(&["Python", "Docker", "AWS"]);
        assert_eq!(skill_match(&set, &set), 1.0);
    }

    #[test]
    fn test_skill_match_disjoint_sets() {
        let a = skill_set(&["Python", "Django"]);
        let b = skill_set(&["Rust", "Kubernetes"]);
        assert_eq!(skill_match(&a, &b), 0.0);
    }

    #[test]
    fn test_skill_match_empty_set_rules() {
        let empty = skill_set(&[]);
        let nonempty = skill_set(&["Python"]);
        assert_eq!(skill_match(&empty, &empty), 1.0);
        assert_eq!(skill_match(&empty, &nonempty), 0.0);
        assert_eq!(skill_match(&nonempty, &empty), 0.0);
    }

    #[test]
    fn test_category_similarity_rewards_adjacent_skills() {
        // Different databases, same category.
        let a = skill_set(&["PostgreSQL"]);
        let b = skill_set(&["MySQL"]);
        assert_eq!(skill_match(&a, &b), 0.0);
        assert_eq!(category_similarity(&a, &b), 1.0);
    }

    #[test]
    fn test_certification_match_no_requirements() {
        let candidate: BTreeSet<String> = BTreeSet::new();
        let job: BTreeSet<String> = BTreeSet::new();
        assert_eq!(certification_match(&candidate, &job), 1.0);
    }

    #[test]
    fn test_certification_match_partial_coverage() {
        let candidate: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let job: BTreeSet<String> = ["a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(certification_match(&candidate, &job), 0.5);
    }

    #[test]
    fn test_experience_meets_preferred() {
        let (score, label) = experience_fit(8.0, 3.0, Some(6.0), None);
        assert_eq!(score, 1.0);
        assert_eq!(label, ExperienceFit::Exceeds);
    }

    #[test]
    fn test_experience_partial_credit_is_linear() {
        // min 4, preferred 8: floor is 2.0, so 5 years sits at (5-2)/(8-2).
        let (score, label) = experience_fit(5.0, 4.0, Some(8.0), None);
        assert!((score - 0.5).abs() < 1e-9);
        assert_eq!(label, ExperienceFit::Meets);
    }

    #[test]
    fn test_experience_below_half_minimum_scores_zero() {
        let (score, label) = experience_fit(1.0, 4.0, Some(8.0), None);
        assert_eq!(score, 0.0);
        assert_eq!(label, ExperienceFit::Below);
    }

    #[test]
    fn test_experience_no_requirement() {
        let (score, label) = experience_fit(0.0, 0.0, None, None);
        assert_eq!(score, 1.0);
        assert_eq!(label, ExperienceFit::NotSpecified);
    }

    #[test]
    fn test_seniority_bands() {
        assert_eq!(seniority_match(5.0, "mid"), 1.0);
        assert_eq!(seniority_match(0.0, "senior"), 0.0);
        assert_eq!(seniority_match(4.0, "unheard-of level"), 0.5);
        // Over-qualified stays well above zero.
        assert!(seniority_match(25.0, "junior") >= 0.5);
    }

    #[test]
    fn test_scores_always_clamped() {
        let (score, _) = experience_fit(1000.0, 1.0, Some(2.0), Some("entry"));
        assert!((0.0..=1.0).contains(&score));
    }
}
