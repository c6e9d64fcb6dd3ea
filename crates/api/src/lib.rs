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

mod error;
mod feedback;
mod input;
mod report;
mod sample;
mod templates;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use feedback::{RATING_PROMPT, handle_feedback};
pub use input::{InputFormat, detect_format, parse_csv, parse_input, parse_json};
pub use report::{
    FEEDBACK_PROMPT, render_analysis, render_core_error, render_team_report,
    render_validation_report,
};
pub use sample::SAMPLE_INPUT;
pub use templates::{TemplateFormat, provide_template};

use tracing::{debug, info, warn};
use workforce_domain::{RawRecord, ScoringPolicy};
use workforce_optimizer::{BatchAnalysis, run_pipeline};

/// Parses input text and runs the validation and metrics pipeline.
///
/// # Arguments
///
/// * `input` - CSV or JSON text
/// * `policy` - Weights and thresholds to score against
///
/// # Returns
///
/// The batch analysis if the input parsed and every team was accepted.
///
/// # Errors
///
/// Returns a parsing error if the input is not recognizable CSV or JSON,
/// or `ApiError::Rejected` carrying the pipeline error if the batch was
/// rejected.
pub fn analyze_input(input: &str, policy: &ScoringPolicy) -> Result<BatchAnalysis, ApiError> {
    let (format, records): (InputFormat, Vec<RawRecord>) =
        parse_input(input).inspect_err(|e| {
            if let ApiError::InvalidJson { reason } = e {
                debug!(reason = %reason, "JSON parser detail");
            }
            warn!(error = %e, "Failed to parse input");
        })?;

    info!(format = %format, records = records.len(), "Parsed input");
    for (idx, record) in records.iter().enumerate() {
        for field in input::unrecognized_fields(record) {
            debug!(row = idx + 1, field, "Ignoring field outside the schema");
        }
    }

    match run_pipeline(&records, policy) {
        Ok(analysis) => {
            info!(
                teams = analysis.team_count(),
                optimal = analysis.optimal_count(),
                "Batch analyzed"
            );
            for metrics in analysis.needing_adjustment() {
                debug!(
                    team_id = %metrics.team.team_id,
                    composite_score = metrics.composite_score,
                    staffing_efficiency_ratio = metrics.staffing_efficiency_ratio,
                    utilization_rate = metrics.utilization_rate,
                    "Team needs adjustment"
                );
            }
            Ok(analysis)
        }
        Err(err) => {
            warn!(error = %err, "Batch rejected");
            Err(ApiError::Rejected(err))
        }
    }
}

/// Renders the outcome of [`analyze_input`] as report text.
///
/// Parsing failures render as a single `ERROR:` line. Rejected batches
/// render their validation report (and any calculation errors).
#[must_use]
pub fn render_outcome(
    outcome: &Result<BatchAnalysis, ApiError>,
    policy: &ScoringPolicy,
) -> String {
    match outcome {
        Ok(analysis) => render_analysis(analysis, policy),
        Err(ApiError::Rejected(err)) => render_core_error(err),
        Err(err) => format!("ERROR: {err}"),
    }
}

/// Processes input text end to end and returns the report text.
///
/// This is [`analyze_input`] followed by [`render_outcome`].
#[must_use]
pub fn process_input(input: &str, policy: &ScoringPolicy) -> String {
    let outcome: Result<BatchAnalysis, ApiError> = analyze_input(input, policy);
    render_outcome(&outcome, policy)
}
