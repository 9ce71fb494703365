//! Canonical skill taxonomy: categories, synonyms, and certifications

mod data;

use crate::error::{RelevanceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Skill categories in fixed priority order.
///
/// Declaration order doubles as the tie-break priority when two taxonomy
/// entries score identically during fuzzy matching, so reordering variants
/// changes normalization results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguages,
    WebTechnologies,
    Databases,
    CloudPlatforms,
    DataScience,
    DevOps,
    MobileDevelopment,
    Security,
    SoftSkills,
    Unknown,
}

impl SkillCategory {
    /// Tie-break priority; lower wins.
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillCategory::ProgrammingLanguages => "programming_languages",
            SkillCategory::WebTechnologies => "web_technologies",
            SkillCategory::Databases => "databases",
            SkillCategory::CloudPlatforms => "cloud_platforms",
            SkillCategory::DataScience => "data_science",
            SkillCategory::DevOps => "devops",
            SkillCategory::MobileDevelopment => "mobile_development",
            SkillCategory::Security => "security",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A single canonical skill with its surface variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub canonical: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Lowercase alternate surface strings mapping to this entry.
    #[serde(default)]
    pub synonyms: BTreeSet<String>,
    /// Certification names associated with this skill.
    #[serde(default)]
    pub certifications: BTreeSet<String>,
}

/// Read-only store of taxonomy entries with case-insensitive lookup.
///
/// Built once at engine construction and shared behind an `Arc`; lookups
/// never fail after a successful load.
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
    by_canonical: HashMap<String, usize>,
    by_synonym: HashMap<String, usize>,
}

impl Taxonomy {
    /// Build the default built-in taxonomy.
    pub fn builtin() -> Self {
        Self::from_entries(data::builtin_entries())
            .expect("built-in taxonomy data is well-formed")
    }

    /// Build a taxonomy from explicit entries, validating for duplicates.
    pub fn from_entries(entries: Vec<TaxonomyEntry>) -> Result<Self> {
        let mut by_canonical = HashMap::new();
        let mut by_synonym = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            let key = normalize_key(&entry.canonical);
            if key.is_empty() {
                return Err(RelevanceError::TaxonomyLoad(format!(
                    "entry {} has an empty canonical name",
                    idx
                )));
            }
            if by_canonical.insert(key, idx).is_some() {
                return Err(RelevanceError::TaxonomyLoad(format!(
                    "duplicate canonical name `{}`",
                    entry.canonical
                )));
            }
        }

        for (idx, entry) in entries.iter().enumerate() {
            for synonym in &entry.synonyms {
                let key = normalize_key(synonym);
                if key.is_empty() {
                    return Err(RelevanceError::TaxonomyLoad(format!(
                        "entry `{}` has an empty synonym",
                        entry.canonical
                    )));
                }
                // A synonym shadowing a canonical name would make lookup
                // order-dependent, so reject it outright.
                if by_canonical.contains_key(&key) {
                    return Err(RelevanceError::TaxonomyLoad(format!(
                        "synonym `{}` of `{}` collides with a canonical name",
                        synonym, entry.canonical
                    )));
                }
                if let Some(prev) = by_synonym.insert(key, idx) {
                    if prev != idx {
                        return Err(RelevanceError::TaxonomyLoad(format!(
                            "synonym `{}` is claimed by both `{}` and `{}`",
                            synonym, entries[prev].canonical, entry.canonical
                        )));
                    }
                }
            }
        }

        Ok(Self {
            entries,
            by_canonical,
            by_synonym,
        })
    }

    /// Load a taxonomy from a JSON file containing an array of entries.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<TaxonomyEntry> = serde_json::from_str(&content).map_err(|e| {
            RelevanceError::TaxonomyLoad(format!("failed to parse {}: {}", path.display(), e))
        })?;
        if entries.is_empty() {
            return Err(RelevanceError::TaxonomyLoad(format!(
                "{} contains no taxonomy entries",
                path.display()
            )));
        }
        Self::from_entries(entries)
    }

    /// Case-insensitive, whitespace-normalized lookup against canonical names.
    pub fn lookup_exact(&self, name: &str) -> Option<&TaxonomyEntry> {
        self.by_canonical
            .get(&normalize_key(name))
            .map(|&idx| &self.entries[idx])
    }

    /// Case-insensitive, whitespace-normalized lookup against synonyms.
    pub fn lookup_synonym(&self, name: &str) -> Option<&TaxonomyEntry> {
        self.by_synonym
            .get(&normalize_key(name))
            .map(|&idx| &self.entries[idx])
    }

    pub fn all_entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// Certifications associated with a canonical skill name.
    pub fn certifications_for(&self, canonical: &str) -> Option<&BTreeSet<String>> {
        self.lookup_exact(canonical).map(|e| &e.certifications)
    }

    /// Every certification name across all entries, for fuzzy cert matching.
    pub fn all_certifications(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .flat_map(|e| e.certifications.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lowercase and collapse internal whitespace for comparison keys.
pub(crate) fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_taxonomy_loads() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.len() > 30);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.lookup_exact("python").is_some());
        assert!(taxonomy.lookup_exact("PYTHON").is_some());
        assert!(taxonomy.lookup_exact("  PostgreSQL  ").is_some());
    }

    #[test]
    fn test_synonym_lookup() {
        let taxonomy = Taxonomy::builtin();
        let entry = taxonomy.lookup_synonym("k8s").unwrap();
        assert_eq!(entry.canonical, "Kubernetes");

        let entry = taxonomy.lookup_synonym("Postgres").unwrap();
        assert_eq!(entry.canonical, "PostgreSQL");
    }

    #[test]
    fn test_certifications_for_canonical_skill() {
        let taxonomy = Taxonomy::builtin();
        let certs = taxonomy.certifications_for("kubernetes").unwrap();
        assert!(certs.contains("Certified Kubernetes Administrator"));
        assert!(taxonomy.certifications_for("Rust").unwrap().is_empty());
        assert!(taxonomy.certifications_for("underwater basket weaving").is_none());
    }

    #[test]
    fn test_unknown_skill_lookup_returns_none() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.lookup_exact("underwater basket weaving").is_none());
        assert!(taxonomy.lookup_synonym("underwater basket weaving").is_none());
    }

    #[test]
    fn test_duplicate_canonical_rejected() {
        let entries = vec![
            TaxonomyEntry {
                canonical: "Python".to_string(),
                category: SkillCategory::ProgrammingLanguages,
                subcategory: None,
                synonyms: BTreeSet::new(),
                certifications: BTreeSet::new(),
            },
            TaxonomyEntry {
                canonical: "python".to_string(),
                category: SkillCategory::ProgrammingLanguages,
                subcategory: None,
                synonyms: BTreeSet::new(),
                certifications: BTreeSet::new(),
            },
        ];
        let result = Taxonomy::from_entries(entries);
        assert!(matches!(result, Err(RelevanceError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_conflicting_synonym_rejected() {
        let mut synonyms_a = BTreeSet::new();
        synonyms_a.insert("js".to_string());
        let mut synonyms_b = BTreeSet::new();
        synonyms_b.insert("js".to_string());

        let entries = vec![
            TaxonomyEntry {
                canonical: "JavaScript".to_string(),
                category: SkillCategory::ProgrammingLanguages,
                subcategory: None,
                synonyms: synonyms_a,
                certifications: BTreeSet::new(),
            },
            TaxonomyEntry {
                canonical: "Java".to_string(),
                category: SkillCategory::ProgrammingLanguages,
                subcategory: None,
                synonyms: synonyms_b,
                certifications: BTreeSet::new(),
            },
        ];
        let result = Taxonomy::from_entries(entries);
        assert!(matches!(result, Err(RelevanceError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_category_priority_ordering() {
        assert!(
            SkillCategory::ProgrammingLanguages.priority()
                < SkillCategory::SoftSkills.priority()
        );
        assert!(SkillCategory::Databases.priority() < SkillCategory::Unknown.priority());
    }
}
