// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workforce_domain::{DomainError, ValidationReport};

/// Errors that stop a batch from producing an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The scoring policy is unusable.
    InvalidPolicy(DomainError),
    /// The batch failed validation; no calculation was attempted.
    ValidationFailed(ValidationReport),
    /// The batch passed validation but at least one team could not be calculated.
    CalculationFailed {
        /// The (passing) validation report.
        report: ValidationReport,
        /// Every calculation failure, in input order.
        errors: Vec<DomainError>,
    },
}

impl CoreError {
    /// Returns the validation report, if validation ran.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::InvalidPolicy(_) => None,
            Self::ValidationFailed(report) | Self::CalculationFailed { report, .. } => Some(report),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy(err) => write!(f, "Domain violation: {err}"),
            Self::ValidationFailed(report) => {
                write!(
                    f,
                    "Validation failed with {} error(s)",
                    report.errors().len()
                )
            }
            Self::CalculationFailed { errors, .. } => {
                write!(f, "Calculation failed for {} team(s)", errors.len())
            }
        }
    }
}

impl std::error::Error for CoreError {}
