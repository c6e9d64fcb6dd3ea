// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use workforce_domain::{ScoringPolicy, ValidationReport};
use workforce_optimizer::BatchAnalysis;
use workforce_optimizer_api::{
    ApiError, SAMPLE_INPUT, TemplateFormat, analyze_input, handle_feedback, provide_template,
    render_outcome,
};

/// Workforce Optimizer - validates team staffing data and scores scheduling efficiency
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and analyze a batch of teams
    Analyze {
        /// CSV or JSON file to read. Reads stdin if not provided.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON file overriding scoring weights and thresholds
        #[arg(short, long)]
        policy: Option<PathBuf>,

        /// Print the structured analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Print the input template(s)
    Template {
        /// csv, json, or both
        #[arg(default_value = "both")]
        format: TemplateFormat,
    },
    /// Respond to an analysis rating from 1 to 5
    Feedback {
        /// The rating
        rating: String,
    },
    /// Analyze the built-in five-team sample batch
    Sample {
        /// Print the structured analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

/// JSON body printed for a rejected batch.
#[derive(Serialize, Debug)]
struct RejectionOutput<'a> {
    error: String,
    validation: Option<&'a ValidationReport>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli: Cli = Cli::parse();

    // Logs go to stderr so that reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match cli.command {
        Command::Analyze {
            input,
            policy,
            json,
        } => {
            let text: String = read_input(input.as_deref())?;
            let policy: ScoringPolicy = match policy {
                Some(path) => load_policy(&path)?,
                None => ScoringPolicy::DEFAULT,
            };
            analyze(&text, &policy, json)
        }
        Command::Template { format } => {
            println!("{}", provide_template(format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Feedback { rating } => {
            println!("{}", handle_feedback(&rating));
            Ok(ExitCode::SUCCESS)
        }
        Command::Sample { json } => analyze(SAMPLE_INPUT, &ScoringPolicy::DEFAULT, json),
    }
}

/// Runs the analysis and prints either the text report or JSON.
///
/// Returns a failing exit code when the input is rejected; the rejection
/// itself is part of the printed output.
fn analyze(
    text: &str,
    policy: &ScoringPolicy,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let outcome: Result<BatchAnalysis, ApiError> = analyze_input(text, policy);

    let rendered: String = if json {
        render_json(&outcome)?
    } else {
        render_outcome(&outcome, policy)
    };
    println!("{rendered}");

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_json(outcome: &Result<BatchAnalysis, ApiError>) -> Result<String, serde_json::Error> {
    match outcome {
        Ok(analysis) => serde_json::to_string_pretty(analysis),
        Err(err) => {
            let validation: Option<&ValidationReport> = match err {
                ApiError::Rejected(core) => core.report(),
                _ => None,
            };
            serde_json::to_string_pretty(&RejectionOutput {
                error: err.to_string(),
                validation,
            })
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, std::io::Error> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Reading input file");
            std::fs::read_to_string(path)
        }
        None => {
            debug!("Reading input from stdin");
            std::io::read_to_string(std::io::stdin())
        }
    }
}

/// Loads and validates a scoring policy override.
///
/// Fields omitted from the file keep their default values.
fn load_policy(path: &Path) -> Result<ScoringPolicy, Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Loading scoring policy");
    let contents: String = std::fs::read_to_string(path)?;
    parse_policy(&contents)
}

fn parse_policy(contents: &str) -> Result<ScoringPolicy, Box<dyn std::error::Error>> {
    let policy: ScoringPolicy = serde_json::from_str(contents)?;
    policy.validate()?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_options() {
        let cli: Cli = Cli::try_parse_from([
            "workforce-optimizer",
            "analyze",
            "--input",
            "teams.csv",
            "--policy",
            "policy.json",
            "--json",
        ])
        .unwrap();

        let Command::Analyze {
            input,
            policy,
            json,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(input, Some(PathBuf::from("teams.csv")));
        assert_eq!(policy, Some(PathBuf::from("policy.json")));
        assert!(json);
    }

    #[test]
    fn test_template_defaults_to_both() {
        let cli: Cli = Cli::try_parse_from(["workforce-optimizer", "template"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Template {
                format: TemplateFormat::Both
            }
        ));
    }

    #[test]
    fn test_template_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["workforce-optimizer", "template", "xml"]).is_err());
    }

    #[test]
    fn test_partial_policy_keeps_defaults() {
        let policy: ScoringPolicy = parse_policy(r#"{"min_composite_score": 40.0}"#).unwrap();

        assert!((policy.min_composite_score - 40.0).abs() < f64::EPSILON);
        assert!(
            (policy.surplus_weight - ScoringPolicy::DEFAULT.surplus_weight).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_policy_with_unknown_field_is_rejected() {
        assert!(parse_policy(r#"{"surplus_wieght": 0.4}"#).is_err());
    }

    #[test]
    fn test_inverted_policy_band_is_rejected() {
        let result: Result<ScoringPolicy, Box<dyn std::error::Error>> =
            parse_policy(r#"{"min_staffing_ratio": 1.5, "max_staffing_ratio": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_rejection_carries_validation_report() {
        let outcome: Result<BatchAnalysis, ApiError> =
            analyze_input(r#"{"teams": []}"#, &ScoringPolicy::DEFAULT);

        let rendered: String = render_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["error"], "Validation failed with 1 error(s)");
        assert_eq!(value["validation"]["record_count"], 0);
    }

    #[test]
    fn test_json_parse_failure_has_no_validation_report() {
        let outcome: Result<BatchAnalysis, ApiError> =
            analyze_input("not data", &ScoringPolicy::DEFAULT);

        let rendered: String = render_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(value["validation"].is_null());
    }

    #[test]
    fn test_json_sample_analysis() {
        let outcome: Result<BatchAnalysis, ApiError> =
            analyze_input(SAMPLE_INPUT, &ScoringPolicy::DEFAULT);

        let rendered: String = render_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["metrics"].as_array().unwrap().len(), 5);
        assert_eq!(value["metrics"][0]["team"]["team_id"], "TeamOmega");
        assert_eq!(value["metrics"][0]["status"], "NeedsAdjustment");
    }
}
