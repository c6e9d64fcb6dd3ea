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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod metrics;
mod policy;
pub mod schema;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{DomainError, ValidationError, ValidationErrorKind};
pub use metrics::{StaffingStatus, TeamMetrics, calculate_team_metrics};
pub use policy::ScoringPolicy;
pub use schema::{FieldKind, FieldSpec, SCHEMA};
pub use types::{RawRecord, RawValue, TeamRecord};
pub use validation::{FieldPresence, FieldValidity, ValidationReport, validate_records};
