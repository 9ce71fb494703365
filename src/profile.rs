//! Candidate and job input types supplied by upstream collaborators

use crate::error::{RelevanceError, Result};
use serde::{Deserialize, Serialize};

/// Parsed candidate data, as produced by an external resume parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    /// Raw skill strings; normalization happens inside the engine.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub resume_text: String,
}

/// Job intake data: requirements against which candidates are scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_certifications: Vec<String>,
    #[serde(default)]
    pub min_years_experience: f64,
    #[serde(default)]
    pub preferred_years_experience: Option<f64>,
    #[serde(default)]
    pub seniority_level: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl CandidateProfile {
    /// Reject structurally invalid input before any scoring happens.
    /// An empty skill list is valid (it scores 0, it does not error).
    pub fn validate(&self) -> Result<()> {
        if !self.years_experience.is_finite() || self.years_experience < 0.0 {
            return Err(RelevanceError::validation(
                "years_experience",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

impl JobRequirement {
    pub fn validate(&self) -> Result<()> {
        if self.required_skills.is_empty()
            && self.preferred_skills.is_empty()
            && self.description.trim().is_empty()
        {
            return Err(RelevanceError::validation(
                "required_skills",
                "job must declare required skills, preferred skills, or a description",
            ));
        }
        if !self.min_years_experience.is_finite() || self.min_years_experience < 0.0 {
            return Err(RelevanceError::validation(
                "min_years_experience",
                "must be a non-negative number",
            ));
        }
        if let Some(preferred) = self.preferred_years_experience {
            if !preferred.is_finite() || preferred < self.min_years_experience {
                return Err(RelevanceError::validation(
                    "preferred_years_experience",
                    "must be at least min_years_experience",
                ));
            }
        }
        Ok(())
    }
}
