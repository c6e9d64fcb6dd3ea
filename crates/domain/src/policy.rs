// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scoring weights and decision thresholds.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Weights and thresholds used to score a team and decide its status.
///
/// The canonical values live in [`ScoringPolicy::DEFAULT`]. When a policy is
/// deserialized, any omitted key falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringPolicy {
    /// Weight applied to the capacity surplus percentage.
    pub surplus_weight: f64,
    /// Weight applied to remote infrastructure efficiency.
    pub efficiency_weight: f64,
    /// Weight applied to the unused share of capacity (`100 - utilization`).
    pub utilization_weight: f64,
    /// Minimum composite score for an optimal schedule (inclusive).
    pub min_composite_score: f64,
    /// Lower bound of the acceptable staffing efficiency ratio (inclusive).
    pub min_staffing_ratio: f64,
    /// Upper bound of the acceptable staffing efficiency ratio (inclusive).
    pub max_staffing_ratio: f64,
    /// Maximum utilization rate for an optimal schedule (inclusive).
    pub max_utilization_rate: f64,
}

impl ScoringPolicy {
    /// The canonical scoring policy.
    pub const DEFAULT: Self = Self {
        surplus_weight: 0.5,
        efficiency_weight: 0.3,
        utilization_weight: 0.2,
        min_composite_score: 60.0,
        min_staffing_ratio: 0.9,
        max_staffing_ratio: 1.1,
        max_utilization_rate: 90.0,
    };

    /// Checks that the policy is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPolicy` if any value is not finite, any
    /// weight is negative, or the staffing ratio band is inverted.
    pub fn validate(&self) -> Result<(), DomainError> {
        let values: [(&str, f64); 7] = [
            ("surplus_weight", self.surplus_weight),
            ("efficiency_weight", self.efficiency_weight),
            ("utilization_weight", self.utilization_weight),
            ("min_composite_score", self.min_composite_score),
            ("min_staffing_ratio", self.min_staffing_ratio),
            ("max_staffing_ratio", self.max_staffing_ratio),
            ("max_utilization_rate", self.max_utilization_rate),
        ];

        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(DomainError::InvalidPolicy(format!(
                "{name} must be a finite number"
            )));
        }

        if let Some((name, _)) = values[..3].iter().find(|(_, value)| *value < 0.0) {
            return Err(DomainError::InvalidPolicy(format!(
                "{name} must not be negative"
            )));
        }

        if self.min_staffing_ratio > self.max_staffing_ratio {
            return Err(DomainError::InvalidPolicy(format!(
                "min_staffing_ratio ({}) exceeds max_staffing_ratio ({})",
                self.min_staffing_ratio, self.max_staffing_ratio
            )));
        }

        Ok(())
    }

    /// Decides whether a team's scheduling is optimal.
    ///
    /// All three conditions must hold: the composite score reaches the
    /// minimum, the staffing ratio lies inside the band, and utilization does
    /// not exceed the maximum.
    #[must_use]
    pub fn is_optimal(
        &self,
        composite_score: f64,
        staffing_efficiency_ratio: f64,
        utilization_rate: f64,
    ) -> bool {
        composite_score >= self.min_composite_score
            && (self.min_staffing_ratio..=self.max_staffing_ratio)
                .contains(&staffing_efficiency_ratio)
            && utilization_rate <= self.max_utilization_rate
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
