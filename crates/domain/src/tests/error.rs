// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FieldKind, ValidationError, ValidationErrorKind};

#[test]
fn test_validation_error_display() {
    let err: ValidationError = ValidationError::NoTeams;
    assert_eq!(format!("{err}"), "No teams found in the input data.");

    let err: ValidationError = ValidationError::MissingField {
        row: 3,
        field: "shift_hours",
    };
    assert_eq!(
        format!("{err}"),
        "Missing required field 'shift_hours' in row 3."
    );

    let err: ValidationError = ValidationError::NotNumeric {
        row: 1,
        field: "current_staff",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid data type for 'current_staff' in row 1. Expected a numeric value."
    );

    let err: ValidationError = ValidationError::OutOfRange {
        row: 2,
        field: "queries_per_day",
        kind: FieldKind::PositiveInteger,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid value for 'queries_per_day' in row 2. Expected positive integer."
    );

    let err: ValidationError = ValidationError::OutOfRange {
        row: 2,
        field: "shift_hours",
        kind: FieldKind::PositiveNumber,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid value for 'shift_hours' in row 2. Expected positive number."
    );
}

#[test]
fn test_validation_error_accessors() {
    let err: ValidationError = ValidationError::NoTeams;
    assert_eq!(err.kind(), ValidationErrorKind::Structural);
    assert_eq!(err.row(), None);
    assert_eq!(err.field(), None);

    let err: ValidationError = ValidationError::OutOfRange {
        row: 4,
        field: "available_capacity",
        kind: FieldKind::Percentage,
    };
    assert_eq!(err.kind(), ValidationErrorKind::Range);
    assert_eq!(err.row(), Some(4));
    assert_eq!(err.field(), Some("available_capacity"));
}

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::ZeroAgentCapacity {
        team_id: String::from("TeamOmega"),
    };
    assert_eq!(
        format!("{err}"),
        "Agent capacity for team 'TeamOmega' is zero; available_capacity must be greater than 0 to calculate metrics"
    );

    let err: DomainError = DomainError::NonFiniteMetric {
        team_id: String::from("TeamOmega"),
        metric: "utilization_rate",
    };
    assert_eq!(
        format!("{err}"),
        "Metric 'utilization_rate' for team 'TeamOmega' is not a finite number; input values are too extreme to calculate metrics"
    );

    let err: DomainError = DomainError::InvalidPolicy(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid scoring policy: test");
}
