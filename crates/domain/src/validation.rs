// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch validation of raw team records.
//!
//! Validation is fail-closed: a single error anywhere in the batch rejects
//! the whole batch. All failures are collected rather than returned early, so
//! the user sees every problem in one pass.

use crate::error::ValidationError;
use crate::schema::{
    AVAILABLE_CAPACITY, AVERAGE_QUERY_TIME, CURRENT_STAFF, FieldKind, FieldSpec, QUERIES_PER_DAY,
    REMOTE_INFRASTRUCTURE_EFFICIENCY, SCHEMA, SHIFT_HOURS, TEAM_ID, numeric_fields,
};
use crate::types::{RawRecord, RawValue, TeamRecord};
use num_traits::ToPrimitive;
use serde::Serialize;

/// Whether a schema field is present in every record of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPresence {
    /// The schema field.
    pub field: &'static str,
    /// `true` if every record carries the field.
    pub present: bool,
}

/// Whether every value of a numeric field passed its type and range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldValidity {
    /// The schema field.
    pub field: &'static str,
    /// The kind the field requires.
    pub kind: FieldKind,
    /// `true` if no type or range error names this field.
    pub valid: bool,
}

/// The outcome of validating a batch of raw records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    record_count: usize,
    fields_in_first_record: usize,
    presence: Vec<FieldPresence>,
    validity: Vec<FieldValidity>,
    errors: Vec<ValidationError>,
    #[serde(skip)]
    teams: Vec<TeamRecord>,
}

impl ValidationReport {
    /// Returns `true` if the batch passed every check.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of records in the batch.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of fields (schema or not) carried by the first record.
    #[must_use]
    pub const fn fields_in_first_record(&self) -> usize {
        self.fields_in_first_record
    }

    /// Presence status per schema field, in schema order.
    #[must_use]
    pub fn presence(&self) -> &[FieldPresence] {
        &self.presence
    }

    /// Validity rollup per numeric field, in schema order.
    #[must_use]
    pub fn validity(&self) -> &[FieldValidity] {
        &self.validity
    }

    /// Every validation error in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The normalized records. Empty unless the batch passed.
    #[must_use]
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Renders the report as ordered, human-readable lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![
            String::from("# Data Validation Report"),
            String::from("## Data Structure Check:"),
            format!(" - Number of teams: {}", self.record_count),
            format!(
                " - Number of fields per record: {}",
                self.fields_in_first_record
            ),
        ];

        // An empty batch stops after the structure check
        if self.record_count > 0 {
            lines.push(String::new());
            lines.push(String::from("## Required Fields Check:"));
            for presence in &self.presence {
                let status: &str = if presence.present {
                    "present"
                } else {
                    "missing"
                };
                lines.push(format!(" - {}: {status}", presence.field));
            }

            lines.push(String::new());
            lines.push(String::from("## Data Type and Value Validation:"));
            for validity in &self.validity {
                let status: &str = if validity.valid {
                    "validated"
                } else {
                    "not valid"
                };
                lines.push(format!(
                    " - {} ({}): {status}",
                    validity.field,
                    validity.kind.constraint_label()
                ));
            }
        }

        lines.push(String::new());
        lines.push(String::from("## Validation Summary:"));
        if self.passed() {
            lines.push(String::from("Data validation is successful!"));
        } else {
            lines.push(String::from("Validation failed with the following errors:"));
            for error in &self.errors {
                lines.push(format!("- ERROR: {error}"));
            }
            lines.push(String::new());
            lines.push(String::from("Please correct and resubmit this data again."));
        }

        lines
    }
}

/// Validates a batch of raw team records.
///
/// Checks run in two passes. The presence pass walks the schema and reports
/// every (row, field) pair that is missing. The type and range pass then
/// walks every record in order, checking each numeric field that is present
/// in schema order. A value that does not parse as a number is reported as a
/// type error and is not range checked.
///
/// When every check passes, the report also carries the normalized
/// [`TeamRecord`]s in input order.
///
/// # Arguments
///
/// * `records` - The raw records, in input order
///
/// # Returns
///
/// A `ValidationReport`. This function never fails; malformed data is
/// reported through the report's error list.
#[must_use]
pub fn validate_records(records: &[RawRecord]) -> ValidationReport {
    let mut errors: Vec<ValidationError> = Vec::new();

    let Some(first) = records.first() else {
        errors.push(ValidationError::NoTeams);
        return ValidationReport {
            record_count: 0,
            fields_in_first_record: 0,
            presence: Vec::new(),
            validity: Vec::new(),
            errors,
            teams: Vec::new(),
        };
    };

    let presence: Vec<FieldPresence> = SCHEMA
        .iter()
        .map(|spec| check_presence(records, spec, &mut errors))
        .collect();

    let mut candidates: Vec<Option<TeamRecord>> = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let row: usize = idx + 1;

        let checked: Vec<(&'static str, f64)> = numeric_fields()
            .filter_map(|spec| check_numeric_field(record, row, spec, &mut errors))
            .collect();

        candidates.push(build_team(record, &checked));
    }

    let validity: Vec<FieldValidity> = numeric_fields()
        .map(|spec| FieldValidity {
            field: spec.name,
            kind: spec.kind,
            valid: !errors.iter().any(|error| {
                matches!(
                    error,
                    ValidationError::NotNumeric { field, .. }
                        | ValidationError::OutOfRange { field, .. } if *field == spec.name
                )
            }),
        })
        .collect();

    let teams: Vec<TeamRecord> = if errors.is_empty() {
        candidates.into_iter().flatten().collect()
    } else {
        Vec::new()
    };

    ValidationReport {
        record_count: records.len(),
        fields_in_first_record: first.len(),
        presence,
        validity,
        errors,
        teams,
    }
}

/// Records a missing-field error for every row lacking `spec`.
fn check_presence(
    records: &[RawRecord],
    spec: &FieldSpec,
    errors: &mut Vec<ValidationError>,
) -> FieldPresence {
    let mut present: bool = true;
    for (idx, record) in records.iter().enumerate() {
        if !record.contains(spec.name) {
            present = false;
            errors.push(ValidationError::MissingField {
                row: idx + 1,
                field: spec.name,
            });
        }
    }

    FieldPresence {
        field: spec.name,
        present,
    }
}

/// Parses and range checks one numeric field of one record.
///
/// Returns the checked value, or `None` if the field is absent (already
/// reported by the presence pass) or failed a check (reported here).
fn check_numeric_field(
    record: &RawRecord,
    row: usize,
    spec: &FieldSpec,
    errors: &mut Vec<ValidationError>,
) -> Option<(&'static str, f64)> {
    let raw: &RawValue = record.get(spec.name)?;

    let Some(value) = raw.as_number() else {
        errors.push(ValidationError::NotNumeric {
            row,
            field: spec.name,
        });
        return None;
    };

    if !spec.kind.accepts(value) {
        errors.push(ValidationError::OutOfRange {
            row,
            field: spec.name,
            kind: spec.kind,
        });
        return None;
    }

    Some((spec.name, value))
}

/// Assembles a typed record from checked values.
///
/// Returns `None` if any field is missing or failed its checks.
fn build_team(record: &RawRecord, checked: &[(&'static str, f64)]) -> Option<TeamRecord> {
    let value = |name: &str| -> Option<f64> {
        checked
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    };

    Some(TeamRecord {
        team_id: record.get(TEAM_ID)?.to_string(),
        current_staff: value(CURRENT_STAFF)?.to_u32()?,
        queries_per_day: value(QUERIES_PER_DAY)?.to_u32()?,
        average_query_time: value(AVERAGE_QUERY_TIME)?,
        shift_hours: value(SHIFT_HOURS)?,
        available_capacity: value(AVAILABLE_CAPACITY)?,
        remote_infrastructure_efficiency: value(REMOTE_INFRASTRUCTURE_EFFICIENCY)?,
    })
}
