//! Fuzzy skill normalization against the canonical taxonomy

use crate::taxonomy::{normalize_key, SkillCategory, Taxonomy, TaxonomyEntry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use strsim::normalized_levenshtein;

/// How a raw skill string was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Synonym,
    Fuzzy,
    Unmatched,
}

/// A raw skill string resolved against the taxonomy.
///
/// Unmatched skills keep the trimmed original string as their canonical
/// label so downstream set comparisons always have something to work with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedSkill {
    pub original: String,
    pub canonical: String,
    pub confidence: f64,
    pub category: SkillCategory,
    pub subcategory: Option<String>,
    pub match_type: MatchType,
}

/// A set of normalized skills deduplicated by canonical name.
///
/// On collision the highest-confidence occurrence wins; iteration order is
/// the insertion order of the surviving entries, which keeps output stable
/// across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "SkillSetRepr")]
pub struct SkillSet {
    skills: Vec<NormalizedSkill>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// Wire shape of a `SkillSet`; the lookup index is rebuilt on the way in so
/// a deserialized set keeps its dedup invariant.
#[derive(Deserialize)]
struct SkillSetRepr {
    #[serde(default)]
    skills: Vec<NormalizedSkill>,
}

impl From<SkillSetRepr> for SkillSet {
    fn from(repr: SkillSetRepr) -> Self {
        let mut set = SkillSet::new();
        for skill in repr.skills {
            set.insert(skill);
        }
        set
    }
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: NormalizedSkill) {
        let key = normalize_key(&skill.canonical);
        if key.is_empty() {
            return;
        }
        match self.index.get(&key) {
            Some(&idx) => {
                if skill.confidence > self.skills[idx].confidence {
                    self.skills[idx] = skill;
                }
            }
            None => {
                self.index.insert(key, self.skills.len());
                self.skills.push(skill);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedSkill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.index.contains_key(&normalize_key(canonical))
    }

    pub fn get(&self, canonical: &str) -> Option<&NormalizedSkill> {
        self.index
            .get(&normalize_key(canonical))
            .map(|&idx| &self.skills[idx])
    }

    /// Comparison keys (normalized canonical names), sorted for determinism.
    pub fn canonical_keys(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// Categories present in this set, excluding `Unknown`.
    pub fn categories(&self) -> BTreeSet<SkillCategory> {
        self.skills
            .iter()
            .map(|s| s.category)
            .filter(|c| *c != SkillCategory::Unknown)
            .collect()
    }
}

/// Resolves free-text skill and certification strings to taxonomy entries.
pub struct SkillNormalizer {
    taxonomy: Arc<Taxonomy>,
    min_similarity: f64,
    prefix_re: Regex,
    suffix_re: Regex,
    version_re: Regex,
    parens_re: Regex,
}

impl SkillNormalizer {
    pub fn new(taxonomy: Arc<Taxonomy>, min_similarity: f64) -> Self {
        let prefix_re =
            Regex::new(r"(?i)^(experience\s+with|knowledge\s+of|proficient\s+in|expert\s+in)\s+")
                .expect("invalid prefix regex");
        let suffix_re =
            Regex::new(r"(?i)\s+(programming|language|framework|library|tool|platform|database)$")
                .expect("invalid suffix regex");
        let version_re = Regex::new(r"\s+v?\d+(\.\d+)*$").expect("invalid version regex");
        let parens_re = Regex::new(r"\([^)]*\)").expect("invalid parens regex");

        Self {
            taxonomy,
            min_similarity: min_similarity.clamp(0.0, 1.0),
            prefix_re,
            suffix_re,
            version_re,
            parens_re,
        }
    }

    pub fn min_similarity(&self) -> f64 {
        self.min_similarity
    }

    /// Normalize a single raw skill string. Never fails; garbage input
    /// degrades to an unmatched skill with confidence 0.
    pub fn normalize(&self, raw: &str) -> NormalizedSkill {
        let cleaned = self.clean_skill_text(raw);
        if cleaned.is_empty() {
            return self.unmatched(raw);
        }

        // 1. Exact match against canonical names
        if let Some(entry) = self.taxonomy.lookup_exact(&cleaned) {
            return self.resolved(raw, entry, 1.0, MatchType::Exact);
        }

        // 2. Exact match against synonyms
        if let Some(entry) = self.taxonomy.lookup_synonym(&cleaned) {
            return self.resolved(raw, entry, 1.0, MatchType::Synonym);
        }

        // 3. Fuzzy match over every canonical name and synonym
        if let Some((entry, similarity)) = self.best_fuzzy_match(&cleaned) {
            if similarity >= self.min_similarity {
                log::debug!(
                    "fuzzy match: `{}` -> `{}` ({:.3})",
                    raw,
                    entry.canonical,
                    similarity
                );
                return self.resolved(raw, entry, similarity, MatchType::Fuzzy);
            }
        }

        // 4. No match above threshold
        self.unmatched(raw)
    }

    /// Normalize a batch of raw skills into a deduplicated `SkillSet`.
    pub fn normalize_list(&self, raws: &[String]) -> SkillSet {
        let mut set = SkillSet::new();
        for raw in raws {
            set.insert(self.normalize(raw));
        }
        set
    }

    /// Normalize a certification string against the taxonomy's certification
    /// space. Falls back to the trimmed original when nothing clears the
    /// threshold, mirroring skill normalization.
    pub fn normalize_certification(&self, raw: &str) -> (String, f64) {
        let cleaned = self.clean_skill_text(raw);
        if cleaned.is_empty() {
            return (raw.trim().to_string(), 0.0);
        }

        let cleaned_key = normalize_key(&cleaned);
        let mut best: Option<(String, f64)> = None;

        for cert in self.taxonomy.all_certifications() {
            let cert_key = normalize_key(&cert);
            if cert_key == cleaned_key {
                return (cert, 1.0);
            }
            let similarity = normalized_levenshtein(&cleaned_key, &cert_key);
            let better = match &best {
                Some((current, score)) => {
                    similarity > *score || (similarity == *score && cert < *current)
                }
                None => true,
            };
            if better {
                best = Some((cert, similarity));
            }
        }

        match best {
            Some((cert, score)) if score >= self.min_similarity => (cert, score),
            _ => (cleaned, 0.0),
        }
    }

    /// Normalize a list of certifications to a deterministic key set.
    pub fn normalize_certifications(&self, raws: &[String]) -> BTreeSet<String> {
        raws.iter()
            .map(|raw| normalize_key(&self.normalize_certification(raw).0))
            .filter(|key| !key.is_empty())
            .collect()
    }

    /// Strip noisy prefixes, suffixes, versions, and parenthesized fragments
    /// before matching. Resume text extraction upstream is messy.
    fn clean_skill_text(&self, raw: &str) -> String {
        let mut text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        text = self.prefix_re.replace(&text, "").to_string();
        text = self.suffix_re.replace(&text, "").to_string();
        text = self.version_re.replace(&text, "").to_string();
        text = self.parens_re.replace_all(&text, "").to_string();
        text.trim().to_string()
    }

    /// Highest-similarity taxonomy entry for the cleaned string.
    ///
    /// Ties are broken by category priority, then lexicographic canonical
    /// name, so taxonomy declaration order never affects results.
    fn best_fuzzy_match(&self, cleaned: &str) -> Option<(&TaxonomyEntry, f64)> {
        let needle = normalize_key(cleaned);
        let mut best: Option<(&TaxonomyEntry, f64)> = None;

        for entry in self.taxonomy.all_entries() {
            let mut entry_best = normalized_levenshtein(&needle, &normalize_key(&entry.canonical));
            for synonym in &entry.synonyms {
                let sim = normalized_levenshtein(&needle, &normalize_key(synonym));
                if sim > entry_best {
                    entry_best = sim;
                }
            }

            let replace = match best {
                Some((current, score)) => {
                    entry_best > score
                        || (entry_best == score
                            && (entry.category.priority(), &entry.canonical)
                                < (current.category.priority(), &current.canonical))
                }
                None => true,
            };
            if replace {
                best = Some((entry, entry_best));
            }
        }

        best
    }

    fn resolved(
        &self,
        raw: &str,
        entry: &TaxonomyEntry,
        confidence: f64,
        match_type: MatchType,
    ) -> NormalizedSkill {
        NormalizedSkill {
            original: raw.to_string(),
            canonical: entry.canonical.clone(),
            confidence: confidence.clamp(0.0, 1.0),
            category: entry.category,
            subcategory: entry.subcategory.clone(),
            match_type,
        }
    }

    fn unmatched(&self, raw: &str) -> NormalizedSkill {
        NormalizedSkill {
            original: raw.to_string(),
            canonical: raw.trim().to_string(),
            confidence: 0.0,
            category: SkillCategory::Unknown,
            subcategory: None,
            match_type: MatchType::Unmatched,
        }
    }
}
