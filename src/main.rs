//! Relevance engine: skill normalization and candidate/job scoring CLI

use clap::Parser;
use log::{error, info};
use relevance_engine::cli::{parse_output_format, Cli, Commands, OutputFormat};
use relevance_engine::{
    rank, skill_gap, CandidateProfile, EngineConfig, JobRequirement, RelevanceEngine,
    RelevanceError, RelevanceResult, Result, Taxonomy,
};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<()> {
    let engine = build_engine(cli.config.as_deref(), cli.taxonomy.as_deref())?;

    match cli.command {
        Commands::Evaluate {
            candidate,
            job,
            output,
            gaps,
        } => {
            let format = output_format(&output)?;
            let candidate: CandidateProfile = read_json(&candidate)?;
            let job: JobRequirement = read_json(&job)?;

            info!("Evaluating candidate against job requirements");
            let result = engine.evaluate(&candidate, &job).await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Console => {
                    print_result(&result, candidate.name.as_deref());
                    if gaps {
                        print_gaps(&engine, &result, &job);
                    }
                }
            }
        }

        Commands::Rank {
            candidates,
            job,
            output,
            top,
        } => {
            let format = output_format(&output)?;
            let candidates: Vec<CandidateProfile> = read_json(&candidates)?;
            let job: JobRequirement = read_json(&job)?;

            info!("Ranking {} candidates", candidates.len());
            let mut ranked = rank(&engine, &candidates, &job).await?;
            if let Some(n) = top {
                ranked.truncate(n);
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
                OutputFormat::Console => {
                    println!("Ranking ({} candidates):", ranked.len());
                    for (position, result) in ranked.iter().enumerate() {
                        let name = candidates[result.candidate_index]
                            .name
                            .as_deref()
                            .unwrap_or("(unnamed)");
                        println!(
                            "  {:>2}. {:<30} {:>5.1}%{}",
                            position + 1,
                            name,
                            result.overall_score * 100.0,
                            if result.degraded { "  [degraded]" } else { "" }
                        );
                    }
                }
            }
        }

        Commands::Normalize { skills, output } => {
            let format = output_format(&output)?;
            let set = engine.normalize_skills(&skills);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
                OutputFormat::Console => {
                    for skill in set.iter() {
                        println!(
                            "  {:<28} -> {:<24} [{}] {:?} ({:.0}%)",
                            skill.original,
                            skill.canonical,
                            skill.category,
                            skill.match_type,
                            skill.confidence * 100.0
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_engine(config: Option<&Path>, taxonomy: Option<&Path>) -> Result<RelevanceEngine> {
    let config = match config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let taxonomy = match taxonomy {
        Some(path) => Taxonomy::from_json_file(path)?,
        None => Taxonomy::builtin(),
    };
    RelevanceEngine::new(config, Arc::new(taxonomy))
}

fn output_format(s: &str) -> Result<OutputFormat> {
    parse_output_format(s).map_err(RelevanceError::Configuration)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_result(result: &RelevanceResult, name: Option<&str>) {
    println!("Candidate: {}", name.unwrap_or("(unnamed)"));
    println!("Overall relevance: {:.1}%", result.overall_score * 100.0);
    if result.degraded {
        println!("  (semantic component unavailable, weights redistributed)");
    }
    println!();
    println!("Component breakdown:");
    for component in &result.components {
        println!(
            "  {:<24} raw {:>5.1}%  weight {:>5.3}  contribution {:>5.1}%",
            component.component.name(),
            component.raw * 100.0,
            component.weight,
            component.weighted * 100.0
        );
    }
    println!();
    println!("Experience fit: {}", result.experience_fit);
    if !result.matched_skills.is_empty() {
        println!("Matched skills: {}", result.matched_skills.join(", "));
    }
    if !result.missing_skills.is_empty() {
        println!("Missing skills: {}", result.missing_skills.join(", "));
    }
    if !result.certification_gaps.is_empty() {
        println!(
            "Certification gaps: {}",
            result.certification_gaps.join(", ")
        );
    }
}

fn print_gaps(engine: &RelevanceEngine, result: &RelevanceResult, job: &JobRequirement) {
    let gaps = skill_gap(engine, result, job);
    if gaps.is_empty() {
        println!("No skill gaps.");
        return;
    }
    println!();
    println!("Skill gaps by job-description prominence:");
    for gap in gaps {
        println!("  {:<24} {} mention(s)", gap.skill, gap.mentions);
    }
}
