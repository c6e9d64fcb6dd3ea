// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The team record schema.
//!
//! Field names, their kinds and the constraints each kind enforces are fixed
//! constants. Every other part of the workspace (validation order, report
//! rollups, input templates) is driven from [`SCHEMA`].

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Team identifier field name.
pub const TEAM_ID: &str = "team_id";
/// Current staff count field name.
pub const CURRENT_STAFF: &str = "current_staff";
/// Daily query volume field name.
pub const QUERIES_PER_DAY: &str = "queries_per_day";
/// Average query handling time (minutes) field name.
pub const AVERAGE_QUERY_TIME: &str = "average_query_time";
/// Shift length (hours) field name.
pub const SHIFT_HOURS: &str = "shift_hours";
/// Available capacity percentage field name.
pub const AVAILABLE_CAPACITY: &str = "available_capacity";
/// Remote infrastructure efficiency percentage field name.
pub const REMOTE_INFRASTRUCTURE_EFFICIENCY: &str = "remote_infrastructure_efficiency";

/// The kind of value a schema field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-form identifier. Never type or range checked.
    Identifier,
    /// A whole number strictly greater than zero.
    PositiveInteger,
    /// A real number strictly greater than zero.
    PositiveNumber,
    /// A real number in the closed interval [0, 100].
    Percentage,
}

impl FieldKind {
    /// Returns whether values of this kind must parse as numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Identifier)
    }

    /// Short constraint label used in the validity rollup.
    #[must_use]
    pub const fn constraint_label(self) -> &'static str {
        match self {
            Self::Identifier => "string",
            Self::PositiveInteger => "positive integer",
            Self::PositiveNumber => "positive number",
            Self::Percentage => "0 to 100",
        }
    }

    /// The expectation stated when a value violates this kind's range.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::Identifier => "Expected a string",
            Self::PositiveInteger => "Expected positive integer",
            Self::PositiveNumber => "Expected positive number",
            Self::Percentage => "Expected value between 0 and 100",
        }
    }

    /// Returns whether a parsed numeric value satisfies this kind's range.
    ///
    /// Positive integers must also fit in a `u32`, which is how they are
    /// carried once normalized.
    #[must_use]
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Self::Identifier => true,
            Self::PositiveInteger => {
                value > 0.0 && value.fract() == 0.0 && value.to_u32().is_some()
            }
            Self::PositiveNumber => value > 0.0,
            Self::Percentage => (0.0..=100.0).contains(&value),
        }
    }
}

/// A single field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name as it appears in input data.
    pub name: &'static str,
    /// The kind of value the field accepts.
    pub kind: FieldKind,
    /// Placeholder shown in input templates.
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, placeholder: &'static str) -> Self {
        Self {
            name,
            kind,
            placeholder,
        }
    }
}

/// All required fields of a team record, in declaration order.
///
/// Validation walks fields in this order, so error ordering within a row
/// follows it as well.
pub static SCHEMA: [FieldSpec; 7] = [
    FieldSpec::new(TEAM_ID, FieldKind::Identifier, "[String]"),
    FieldSpec::new(CURRENT_STAFF, FieldKind::PositiveInteger, "[positive integer]"),
    FieldSpec::new(QUERIES_PER_DAY, FieldKind::PositiveInteger, "[positive integer]"),
    FieldSpec::new(
        AVERAGE_QUERY_TIME,
        FieldKind::PositiveNumber,
        "[positive number in minutes]",
    ),
    FieldSpec::new(SHIFT_HOURS, FieldKind::PositiveNumber, "[positive number]"),
    FieldSpec::new(AVAILABLE_CAPACITY, FieldKind::Percentage, "[0-100]"),
    FieldSpec::new(
        REMOTE_INFRASTRUCTURE_EFFICIENCY,
        FieldKind::Percentage,
        "[0-100]",
    ),
];

/// Iterates over the numeric fields of the schema in declaration order.
pub fn numeric_fields() -> impl Iterator<Item = &'static FieldSpec> {
    SCHEMA.iter().filter(|spec| spec.kind.is_numeric())
}

/// Looks up a field definition by name.
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
