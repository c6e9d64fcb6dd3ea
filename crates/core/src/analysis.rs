// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use workforce_domain::{TeamMetrics, ValidationReport};

/// The result of a successful batch run.
///
/// Holds the passing validation report and one `TeamMetrics` per team, in
/// input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchAnalysis {
    /// The validation report that gated the calculation.
    pub validation: ValidationReport,
    /// Metrics per team, in input order.
    pub metrics: Vec<TeamMetrics>,
}

impl BatchAnalysis {
    /// Number of teams evaluated.
    #[must_use]
    pub const fn team_count(&self) -> usize {
        self.metrics.len()
    }

    /// Number of teams whose scheduling is optimal.
    #[must_use]
    pub fn optimal_count(&self) -> usize {
        self.metrics.iter().filter(|m| m.is_optimal()).count()
    }

    /// Teams whose scheduling needs adjustment, in input order.
    pub fn needing_adjustment(&self) -> impl Iterator<Item = &TeamMetrics> {
        self.metrics.iter().filter(|m| !m.is_optimal())
    }
}
