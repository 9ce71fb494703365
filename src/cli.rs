//! CLI interface for the relevance engine

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relevance-engine")]
#[command(about = "Skill normalization and candidate/job relevance scoring")]
#[command(
    long_about = "Normalize free-text skills against a canonical taxonomy and score candidates \
                  against job requirements with a weighted multi-factor breakdown"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Taxonomy file path (JSON); defaults to the built-in taxonomy
    #[arg(short, long, global = true)]
    pub taxonomy: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against one job
    Evaluate {
        /// Path to candidate profile (JSON)
        #[arg(short = 'C', long)]
        candidate: PathBuf,

        /// Path to job requirement (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include a skill-gap breakdown ordered by job-description mentions
        #[arg(long)]
        gaps: bool,
    },

    /// Rank a batch of candidates against one job
    Rank {
        /// Path to a JSON array of candidate profiles
        #[arg(short = 'C', long)]
        candidates: PathBuf,

        /// Path to job requirement (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show only the top N candidates
        #[arg(long)]
        top: Option<usize>,
    },

    /// Normalize raw skill strings against the taxonomy
    Normalize {
        /// Skill strings to normalize
        #[arg(required = true)]
        skills: Vec<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "unknown output format `{}` (expected console or json)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_cli_parses_evaluate() {
        let cli = Cli::try_parse_from([
            "relevance-engine",
            "evaluate",
            "--candidate",
            "candidate.json",
            "--job",
            "job.json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Evaluate { .. }));
    }

    #[test]
    fn test_cli_parses_normalize_with_skills() {
        let cli = Cli::try_parse_from(["relevance-engine", "normalize", "Pythn", "react.js"])
            .unwrap();
        match cli.command {
            Commands::Normalize { skills, .. } => assert_eq!(skills.len(), 2),
            _ => panic!("expected normalize command"),
        }
    }
}
