// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_sample_batch, create_test_record};
use crate::{BatchAnalysis, CoreError, run_pipeline};
use workforce_domain::{
    DomainError, RawRecord, RawValue, ScoringPolicy, ValidationError, ValidationReport,
};

#[test]
fn test_sample_batch_is_analyzed_in_input_order() {
    let records: Vec<RawRecord> = create_sample_batch();

    let analysis: BatchAnalysis = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap();

    assert!(analysis.validation.passed());
    assert_eq!(analysis.team_count(), 5);
    let ids: Vec<&str> = analysis
        .metrics
        .iter()
        .map(|m| m.team.team_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["TeamOmega", "TeamSigma", "TeamTheta", "TeamLambda", "TeamZeta"]
    );
}

#[test]
fn test_empty_batch_is_rejected_with_structural_error() {
    let result: Result<BatchAnalysis, CoreError> = run_pipeline(&[], &ScoringPolicy::DEFAULT);

    match result {
        Err(CoreError::ValidationFailed(report)) => {
            assert_eq!(report.errors(), &[ValidationError::NoTeams]);
        }
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_validation_failure_prevents_calculation() {
    let mut records: Vec<RawRecord> = create_sample_batch();
    records[3].insert("queries_per_day", RawValue::text("lots"));

    let err: CoreError = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap_err();

    let CoreError::ValidationFailed(report) = err else {
        panic!("Expected ValidationFailed");
    };
    assert_eq!(
        report.errors(),
        &[ValidationError::NotNumeric {
            row: 4,
            field: "queries_per_day"
        }]
    );
    assert!(report.teams().is_empty());
}

#[test]
fn test_missing_field_rejects_batch() {
    let mut records: Vec<RawRecord> = create_sample_batch();
    records[1].remove("average_query_time");

    let err: CoreError = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap_err();

    let report: &ValidationReport = err.report().unwrap();
    assert!(report.errors().contains(&ValidationError::MissingField {
        row: 2,
        field: "average_query_time"
    }));
}

#[test]
fn test_zero_capacity_fails_whole_batch() {
    let mut records: Vec<RawRecord> = create_sample_batch();
    records.push(create_test_record(
        "TeamIdle",
        [4.0, 20.0, 2.0, 8.0, 0.0, 50.0],
    ));

    let err: CoreError = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap_err();

    match err {
        CoreError::CalculationFailed { report, errors } => {
            assert!(report.passed());
            assert_eq!(
                errors,
                vec![DomainError::ZeroAgentCapacity {
                    team_id: String::from("TeamIdle")
                }]
            );
        }
        other => panic!("Expected CalculationFailed, got {other:?}"),
    }
}

#[test]
fn test_overflowing_inputs_fail_whole_batch() {
    let mut records: Vec<RawRecord> = create_sample_batch();
    records[0].insert("available_capacity", RawValue::text("1e-320"));
    records[2].insert("average_query_time", RawValue::text("1e308"));

    let err: CoreError = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap_err();

    let CoreError::CalculationFailed { report, errors } = err else {
        panic!("Expected CalculationFailed");
    };
    assert!(report.passed());
    assert_eq!(
        errors,
        vec![
            DomainError::NonFiniteMetric {
                team_id: String::from("TeamOmega"),
                metric: "utilization_rate",
            },
            DomainError::NonFiniteMetric {
                team_id: String::from("TeamTheta"),
                metric: "workload_step1",
            },
        ]
    );
}

#[test]
fn test_invalid_policy_is_rejected_before_validation() {
    let policy: ScoringPolicy = ScoringPolicy {
        min_staffing_ratio: 2.0,
        max_staffing_ratio: 1.0,
        ..ScoringPolicy::DEFAULT
    };

    let err: CoreError = run_pipeline(&create_sample_batch(), &policy).unwrap_err();

    assert!(matches!(err, CoreError::InvalidPolicy(_)));
    assert!(err.report().is_none());
}

#[test]
fn test_pipeline_is_deterministic() {
    let records: Vec<RawRecord> = create_sample_batch();

    let first: BatchAnalysis = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap();
    let second: BatchAnalysis = run_pipeline(&records, &ScoringPolicy::DEFAULT).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_core_error_display() {
    let report: ValidationReport = workforce_domain::validate_records(&[]);
    let err: CoreError = CoreError::ValidationFailed(report);
    assert_eq!(format!("{err}"), "Validation failed with 1 error(s)");

    let err: CoreError = CoreError::InvalidPolicy(DomainError::InvalidPolicy(String::from(
        "test",
    )));
    assert_eq!(
        format!("{err}"),
        "Domain violation: Invalid scoring policy: test"
    );
}
