// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::schema::FieldKind;
use serde::Serialize;

/// Errors that can occur while applying domain rules to validated data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Agent capacity evaluated to zero, so capacity-relative metrics are undefined.
    ZeroAgentCapacity {
        /// The team whose capacity was zero.
        team_id: String,
    },
    /// A derived metric overflowed or is otherwise not a finite number.
    NonFiniteMetric {
        /// The team whose metrics could not be calculated.
        team_id: String,
        /// The first metric, in calculation order, that is not finite.
        metric: &'static str,
    },
    /// A scoring policy is internally inconsistent.
    InvalidPolicy(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroAgentCapacity { team_id } => {
                write!(
                    f,
                    "Agent capacity for team '{team_id}' is zero; available_capacity must be greater than 0 to calculate metrics"
                )
            }
            Self::NonFiniteMetric { team_id, metric } => {
                write!(
                    f,
                    "Metric '{metric}' for team '{team_id}' is not a finite number; input values are too extreme to calculate metrics"
                )
            }
            Self::InvalidPolicy(msg) => write!(f, "Invalid scoring policy: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Classification of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// The batch itself is empty or absent.
    Structural,
    /// A required field is absent from a record.
    MissingField,
    /// A field value is not numeric.
    Type,
    /// A numeric value lies outside the field's domain.
    Range,
}

/// A single validation failure.
///
/// Rows are 1-based, matching how users count records in their input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// The batch contains no team records.
    NoTeams,
    /// A required field is absent.
    MissingField {
        /// The 1-based row index.
        row: usize,
        /// The missing field.
        field: &'static str,
    },
    /// A numeric field could not be parsed as a number.
    NotNumeric {
        /// The 1-based row index.
        row: usize,
        /// The offending field.
        field: &'static str,
    },
    /// A numeric field is outside its allowed domain.
    OutOfRange {
        /// The 1-based row index.
        row: usize,
        /// The offending field.
        field: &'static str,
        /// The kind the field requires.
        kind: FieldKind,
    },
}

impl ValidationError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NoTeams => ValidationErrorKind::Structural,
            Self::MissingField { .. } => ValidationErrorKind::MissingField,
            Self::NotNumeric { .. } => ValidationErrorKind::Type,
            Self::OutOfRange { .. } => ValidationErrorKind::Range,
        }
    }

    /// Returns the 1-based row this error refers to, if any.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::NoTeams => None,
            Self::MissingField { row, .. }
            | Self::NotNumeric { row, .. }
            | Self::OutOfRange { row, .. } => Some(*row),
        }
    }

    /// Returns the field this error refers to, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NoTeams => None,
            Self::MissingField { field, .. }
            | Self::NotNumeric { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTeams => write!(f, "No teams found in the input data."),
            Self::MissingField { row, field } => {
                write!(f, "Missing required field '{field}' in row {row}.")
            }
            Self::NotNumeric { row, field } => {
                write!(
                    f,
                    "Invalid data type for '{field}' in row {row}. Expected a numeric value."
                )
            }
            Self::OutOfRange { row, field, kind } => {
                write!(
                    f,
                    "Invalid value for '{field}' in row {row}. {}.",
                    kind.expectation()
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
