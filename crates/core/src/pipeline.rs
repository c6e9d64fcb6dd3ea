// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::analysis::BatchAnalysis;
use crate::error::CoreError;
use workforce_domain::{
    DomainError, RawRecord, ScoringPolicy, TeamMetrics, ValidationReport, calculate_team_metrics,
    validate_records,
};

/// Runs a batch of raw records through validation and calculation.
///
/// Validation is a whole-batch gate: it completes before any calculation
/// starts, and a single validation error anywhere rejects the batch. Teams
/// are then calculated independently in input order. Any calculation
/// failure also rejects the batch, so a partial analysis is never returned.
///
/// # Arguments
///
/// * `records` - The raw records, in input order
/// * `policy` - Weights and thresholds to score against
///
/// # Returns
///
/// * `Ok(BatchAnalysis)` with the validation report and per-team metrics
/// * `Err(CoreError)` if the policy is invalid or the batch is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The scoring policy is inconsistent
/// - Any record fails validation
/// - Any team's metrics cannot be calculated
pub fn run_pipeline(
    records: &[RawRecord],
    policy: &ScoringPolicy,
) -> Result<BatchAnalysis, CoreError> {
    policy.validate().map_err(CoreError::InvalidPolicy)?;

    let report: ValidationReport = validate_records(records);
    if !report.passed() {
        return Err(CoreError::ValidationFailed(report));
    }

    let mut metrics: Vec<TeamMetrics> = Vec::with_capacity(report.teams().len());
    let mut errors: Vec<DomainError> = Vec::new();

    for team in report.teams() {
        match calculate_team_metrics(team, policy) {
            Ok(team_metrics) => metrics.push(team_metrics),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(CoreError::CalculationFailed { report, errors });
    }

    Ok(BatchAnalysis {
        validation: report,
        metrics,
    })
}
