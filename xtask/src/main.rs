// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Every subcommand expands into a list of [`Step`]s which are run in
//! order, stopping at the first failure. Composite commands such as `ci`
//! and `lint` are just the concatenation of their parts.
//!
//! `cargo xtask smoke` drives the `workforce-optimizer` binary against the
//! built-in sample batch, each input template and each feedback rating.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::{cmd, Expression};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Package that provides the `workforce-optimizer` binary.
const CLI_PACKAGE: &str = "workforce-optimizer-cli";

/// Ratings accepted by `workforce-optimizer feedback`.
const RATINGS: [&str; 5] = ["1", "2", "3", "4", "5"];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    let steps: Vec<Step> = args.command.steps();
    tracing::debug!(count = steps.len(), "planned steps");
    if let Err(err) = steps.iter().try_for_each(Step::run) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Command {
    /// Lint, audit dependencies, build, test and smoke-run the CLI
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Audit dependencies with cargo-deny
    #[command(visible_alias = "cd")]
    Deny,

    /// Look for unused dependencies with cargo-machete
    #[command(visible_alias = "m")]
    Machete,

    /// Run every linter
    #[command(visible_alias = "l")]
    Lint,

    /// Clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build rustdoc for each workspace package with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Verify rustfmt formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Spell-check the tree with typos
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply rustfmt formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit, integration and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests only
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run unit and integration tests only
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Exercise the CLI binary end to end
    #[command(visible_alias = "s")]
    Smoke,
}

impl Command {
    /// Expands the command into the steps it runs, in order.
    fn steps(self) -> Vec<Step> {
        match self {
            Self::CI => [
                Self::Lint,
                Self::Deny,
                Self::Machete,
                Self::Build,
                Self::Test,
                Self::Smoke,
            ]
            .into_iter()
            .flat_map(Self::steps)
            .collect(),
            Self::Lint => [
                Self::LintClippy,
                Self::LintDocs,
                Self::LintFormatting,
                Self::LintTypos,
            ]
            .into_iter()
            .flat_map(Self::steps)
            .collect(),
            // Doc tests last; they are the slowest
            Self::Test => [Self::TestLibs, Self::TestDocs]
                .into_iter()
                .flat_map(Self::steps)
                .collect(),
            Self::Build => vec![Step::cargo(&["build", "--all-targets", "--all-features"])],
            Self::Check => vec![Step::cargo(&["check", "--all-targets", "--all-features"])],
            Self::Coverage => vec![Step::cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ])],
            Self::Deny => vec![Step::cargo(&["deny", "check"])],
            Self::Machete => vec![Step::Tool("cargo-machete")],
            Self::LintClippy => vec![Step::cargo(&[
                "clippy",
                "--all-targets",
                "--all-features",
                "--",
                "-D",
                "warnings",
            ])],
            Self::LintDocs => vec![Step::Docs],
            Self::LintFormatting => vec![Step::nightly(&["fmt", "--all", "--check"])],
            Self::LintTypos => vec![Step::Tool("typos")],
            Self::FixFormatting => vec![Step::nightly(&["fmt", "--all"])],
            Self::TestDocs => vec![Step::cargo(&["test", "--doc", "--all-features"])],
            Self::TestLibs => vec![Step::cargo(&["test", "--all-targets", "--all-features"])],
            Self::Smoke => smoke_steps(),
        }
    }
}

/// A single unit of work run by a subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Step {
    /// A cargo invocation, optionally pinned to the nightly toolchain.
    Cargo {
        args: Vec<&'static str>,
        nightly: bool,
    },
    /// An external tool run with no arguments.
    Tool(&'static str),
    /// `cargo doc` for each default workspace package, docs.rs style.
    Docs,
    /// A quiet run of the CLI binary whose stdout is discarded.
    Cli(Vec<&'static str>),
}

impl Step {
    fn cargo(args: &[&'static str]) -> Self {
        Self::Cargo {
            args: args.to_vec(),
            nightly: false,
        }
    }

    fn nightly(args: &[&'static str]) -> Self {
        Self::Cargo {
            args: args.to_vec(),
            nightly: true,
        }
    }

    fn run(&self) -> Result<()> {
        match self {
            Self::Cargo { args, nightly } => {
                let expr: Expression = cmd("cargo", args.iter().copied());
                if *nightly {
                    on_nightly(expr).run_with_trace()?;
                } else {
                    expr.run_with_trace()?;
                }
            }
            Self::Tool(program) => {
                cmd!(*program).run_with_trace()?;
            }
            Self::Docs => {
                let meta = MetadataCommand::new()
                    .exec()
                    .wrap_err("failed to get cargo metadata")?;
                for package in meta.workspace_default_packages() {
                    let name: &str = &package.name;
                    on_nightly(cmd!(
                        "cargo",
                        "doc",
                        "--no-deps",
                        "--all-features",
                        "--package",
                        name
                    ))
                    .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
                        .run_with_trace()?;
                }
            }
            Self::Cli(cli_args) => {
                let args: Vec<&str> = ["run", "--quiet", "--package", CLI_PACKAGE, "--"]
                    .into_iter()
                    .chain(cli_args.iter().copied())
                    .collect();
                cmd("cargo", args)
                    .stdout_null()
                    .run_with_trace()
                    .wrap_err_with(|| format!("smoke run failed: {}", cli_args.join(" ")))?;
            }
        }
        Ok(())
    }
}

/// Pins an expression to the nightly toolchain.
///
/// `CARGO` is removed since it points at the toolchain xtask itself was
/// launched with.
fn on_nightly(expr: Expression) -> Expression {
    expr.env_remove("CARGO").env("RUSTUP_TOOLCHAIN", "nightly")
}

/// The sample batch as text and JSON, every template format, every rating.
fn smoke_steps() -> Vec<Step> {
    let mut steps: Vec<Step> = vec![
        Step::Cli(vec!["sample"]),
        Step::Cli(vec!["sample", "--json"]),
    ];
    steps.extend(
        ["csv", "json", "both"]
            .into_iter()
            .map(|format| Step::Cli(vec!["template", format])),
    );
    steps.extend(
        RATINGS
            .into_iter()
            .map(|rating| Step::Cli(vec!["feedback", rating])),
    );
    steps
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // Repeat the command; the first log line may have scrolled away
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_runs_lint_first_and_smoke_last() {
        let steps: Vec<Step> = Command::CI.steps();

        assert_eq!(steps.first(), Command::LintClippy.steps().first());
        assert_eq!(steps.last(), Some(&Step::Cli(vec!["feedback", "5"])));
    }

    #[test]
    fn test_test_runs_doc_tests_last() {
        let steps: Vec<Step> = Command::Test.steps();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1], Step::cargo(&["test", "--doc", "--all-features"]));
    }

    #[test]
    fn test_formatting_uses_nightly() {
        assert!(matches!(
            Command::LintFormatting.steps().as_slice(),
            [Step::Cargo { nightly: true, .. }]
        ));
    }

    #[test]
    fn test_smoke_covers_every_template_and_rating() {
        let steps: Vec<Step> = smoke_steps();

        assert_eq!(steps.len(), 2 + 3 + RATINGS.len());
        assert!(steps.contains(&Step::Cli(vec!["template", "both"])));
    }
}
