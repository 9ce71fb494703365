//! Candidate ranking and skill-gap analysis over scored results

use crate::error::Result;
use crate::profile::{CandidateProfile, JobRequirement};
use crate::scoring::scorer::{raw_skill_match, RelevanceEngine, RelevanceResult};
use aho_corasick::{AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};

/// Score every candidate against the job concurrently, then sort the
/// results into a deterministic ranking.
///
/// Order: overall score descending, raw skill-match descending, then input
/// position ascending. Equal candidates therefore always rank in the order
/// they were supplied.
pub async fn rank(
    engine: &RelevanceEngine,
    candidates: &[CandidateProfile],
    job: &JobRequirement,
) -> Result<Vec<RelevanceResult>> {
    let evaluations = candidates
        .iter()
        .map(|candidate| engine.evaluate(candidate, job));
    let outcomes = futures::future::join_all(evaluations).await;

    let mut results = Vec::with_capacity(outcomes.len());
    for (index, outcome) in outcomes.into_iter().enumerate() {
        let mut result = outcome?;
        result.candidate_index = index;
        results.push(result);
    }

    results.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then(raw_skill_match(b).total_cmp(&raw_skill_match(a)))
            .then(a.candidate_index.cmp(&b.candidate_index))
    });

    Ok(results)
}

/// One missing skill, weighted by how often the job description mentions it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapEntry {
    pub skill: String,
    /// Mentions of the skill or any of its synonyms in the job description.
    pub mentions: usize,
}

/// Prioritize a result's missing skills by how prominent each is in the job
/// description. Mentions are counted case-insensitively across the canonical
/// name and every taxonomy synonym; ties keep the job's declaration order.
pub fn skill_gap(
    engine: &RelevanceEngine,
    result: &RelevanceResult,
    job: &JobRequirement,
) -> Vec<SkillGapEntry> {
    let mut entries: Vec<SkillGapEntry> = result
        .missing_skills
        .iter()
        .map(|skill| SkillGapEntry {
            skill: skill.clone(),
            mentions: mention_count(engine, skill, &job.description),
        })
        .collect();

    entries.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    entries
}

fn mention_count(engine: &RelevanceEngine, canonical: &str, description: &str) -> usize {
    let mut patterns = vec![canonical.to_string()];
    if let Some(entry) = engine.taxonomy().lookup_exact(canonical) {
        patterns.extend(entry.synonyms.iter().cloned());
    }

    let matcher = match AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
    {
        Ok(matcher) => matcher,
        Err(e) => {
            log::warn!("skill gap matcher build failed for `{}`: {}", canonical, e);
            return 0;
        }
    };

    // Hits inside larger words are not mentions ("Go" in "Google",
    // "Java" in "JavaScript"), so require non-alphanumeric neighbors.
    let bytes = description.as_bytes();
    matcher
        .find_iter(description)
        .filter(|m| {
            let before_ok = m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
            let after_ok = m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric();
            before_ok && after_ok
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::taxonomy::Taxonomy;
    use std::sync::Arc;

    fn engine() -> RelevanceEngine {
        RelevanceEngine::new(EngineConfig::default(), Arc::new(Taxonomy::builtin())).unwrap()
    }

    fn candidate(name: &str, skills: &[&str], years: f64) -> CandidateProfile {
        CandidateProfile {
            name: Some(name.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            certifications: vec![],
            years_experience: years,
            resume_text: format!("{} engineer", skills.join(" ")),
        }
    }

    fn job(required: &[&str], description: &str) -> JobRequirement {
        JobRequirement {
            title: None,
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec![],
            required_certifications: vec![],
            min_years_experience: 0.0,
            preferred_years_experience: None,
            seniority_level: None,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rank_orders_by_overall_score() {
        let engine = engine();
        let job = job(&["Python", "Docker", "AWS"], "Python and Docker on AWS");
        let candidates = vec![
            candidate("weak", &["Excel"], 1.0),
            candidate("strong", &["Python", "Docker", "AWS"], 5.0),
            candidate("middle", &["Python"], 3.0),
        ];

        let ranked = rank(&engine, &candidates, &job).await.unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].candidate_index, 1);
        assert!(ranked[0].overall_score >= ranked[1].overall_score);
        assert!(ranked[1].overall_score >= ranked[2].overall_score);
    }

    #[tokio::test]
    async fn test_rank_identical_candidates_keep_input_order() {
        let engine = engine();
        let job = job(&["Python"], "Python work");
        let twin = candidate("twin", &["Python"], 4.0);
        let candidates = vec![twin.clone(), twin.clone(), twin];

        let ranked = rank(&engine, &candidates, &job).await.unwrap();
        let indices: Vec<usize> = ranked.iter().map(|r| r.candidate_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_rank_is_deterministic_across_runs() {
        let engine = engine();
        let job = job(&["Python", "Kubernetes"], "Python services on Kubernetes");
        let candidates = vec![
            candidate("a", &["Python"], 2.0),
            candidate("b", &["Kubernetes"], 2.0),
            candidate("c", &["Python", "Kubernetes"], 2.0),
        ];

        let first = rank(&engine, &candidates, &job).await.unwrap();
        let second = rank(&engine, &candidates, &job).await.unwrap();
        let order = |r: &[RelevanceResult]| r.iter().map(|x| x.candidate_index).collect::<Vec<_>>();
        assert_eq!(order(&first), order(&second));
    }

    #[tokio::test]
    async fn test_rank_empty_batch() {
        let engine = engine();
        let job = job(&["Python"], "Python work");
        let ranked = rank(&engine, &[], &job).await.unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_skill_gap_prioritizes_frequent_mentions() {
        let engine = engine();
        let job = job(
            &["Kubernetes", "Docker", "Terraform"],
            "Kubernetes clusters everywhere. We deploy to Kubernetes (k8s) daily. \
             Docker images feed the k8s fleet. Terraform appears once.",
        );
        let empty = candidate("empty", &[], 0.0);

        let result = engine.evaluate(&empty, &job).await.unwrap();
        let gaps = skill_gap(&engine, &result, &job);

        assert_eq!(gaps[0].skill, "Kubernetes");
        assert!(gaps[0].mentions >= 3);
        let names: Vec<&str> = gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(names, vec!["Kubernetes", "Docker", "Terraform"]);
    }

    #[tokio::test]
    async fn test_skill_gap_counts_whole_words_only() {
        let engine = engine();
        // Plenty of words containing the letter r, but the skill "R" itself
        // is never mentioned; "Go" must not match inside "Google".
        let job = job(
            &["R", "Go", "Kubernetes"],
            "Kubernetes operators run our Kubernetes clusters on Google infrastructure; \
             Kubernetes experience required.",
        );
        let empty = candidate("empty", &[], 0.0);

        let result = engine.evaluate(&empty, &job).await.unwrap();
        let gaps = skill_gap(&engine, &result, &job);

        assert_eq!(gaps[0].skill, "Kubernetes");
        assert_eq!(gaps[0].mentions, 3);
        let r_gap = gaps.iter().find(|g| g.skill == "R").unwrap();
        assert_eq!(r_gap.mentions, 0);
        let go_gap = gaps.iter().find(|g| g.skill == "Go").unwrap();
        assert_eq!(go_gap.mentions, 0);
    }

    #[tokio::test]
    async fn test_skill_gap_ties_keep_declaration_order() {
        let engine = engine();
        let job = job(&["Python", "Rust"], "no skill names in this text");
        let empty = candidate("empty", &[], 0.0);

        let result = engine.evaluate(&empty, &job).await.unwrap();
        let gaps = skill_gap(&engine, &result, &job);
        let names: Vec<&str> = gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(names, vec!["Python", "Rust"]);
    }
}
