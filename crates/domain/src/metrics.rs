// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling metrics for a single validated team.
//!
//! This module provides a pure, deterministic calculation that keeps every
//! intermediate value so that reports can show each step of the derivation.

use crate::error::DomainError;
use crate::policy::ScoringPolicy;
use crate::types::TeamRecord;
use serde::{Deserialize, Serialize};

/// Minutes per shift hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Final scheduling verdict for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffingStatus {
    /// Every optimality condition holds.
    Optimal,
    /// At least one optimality condition fails.
    NeedsAdjustment,
}

impl StaffingStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::NeedsAdjustment => "Needs Adjustment",
        }
    }
}

impl std::fmt::Display for StaffingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All derived metrics for one team.
///
/// Inputs are carried alongside the results so that a report can be
/// rendered from this value alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    /// The validated inputs.
    pub team: TeamRecord,
    /// `queries_per_day × average_query_time`.
    pub workload_step1: f64,
    /// Minutes of query work per agent per day.
    pub workload_per_agent: f64,
    /// `shift_hours × 60`.
    pub capacity_step1: f64,
    /// Usable minutes per agent per shift.
    pub agent_capacity: f64,
    /// Percentage of agent capacity consumed by workload.
    pub utilization_rate: f64,
    /// Unused share of agent capacity, as a percentage.
    pub capacity_surplus_percentage: f64,
    /// Surplus contribution to the composite score.
    pub weighted_surplus: f64,
    /// Infrastructure efficiency contribution to the composite score.
    pub weighted_efficiency: f64,
    /// Utilization contribution to the composite score.
    pub weighted_utilization: f64,
    /// Sum of the weighted contributions.
    pub composite_score: f64,
    /// Staff needed to cover the workload at current capacity.
    pub required_staff: f64,
    /// `current_staff / required_staff`.
    pub staffing_efficiency_ratio: f64,
    /// The scheduling verdict.
    pub status: StaffingStatus,
    /// Natural-language recommendation.
    pub recommendation: String,
}

impl TeamMetrics {
    /// Returns `true` if the team's scheduling is optimal.
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        matches!(self.status, StaffingStatus::Optimal)
    }

    /// Workload per agent as a fraction of agent capacity (before scaling to a percentage).
    #[must_use]
    pub fn utilization_fraction(&self) -> f64 {
        self.workload_per_agent / self.agent_capacity
    }
}

/// Calculates all scheduling metrics for a validated team.
///
/// Steps are applied in a fixed order and every intermediate value is kept:
///
/// 1. Workload: `queries_per_day × average_query_time`, then divided by
///    `current_staff`
/// 2. Capacity: `shift_hours × 60`, then scaled by `available_capacity / 100`
/// 3. Utilization: workload per agent over agent capacity, as a percentage
/// 4. Composite score: weighted surplus, efficiency and unused capacity
/// 5. Staffing: required staff and the actual-to-required ratio
///
/// # Arguments
///
/// * `team` - A record that has passed validation
/// * `policy` - Weights and thresholds to score against
///
/// # Errors
///
/// Returns `DomainError::ZeroAgentCapacity` if agent capacity is not
/// strictly positive (an `available_capacity` of 0 passes validation but
/// leaves no capacity to divide by).
///
/// Returns `DomainError::NonFiniteMetric` if any derived value overflows to
/// an infinity or NaN, which extreme but in-range inputs can cause (for
/// example a vanishingly small `available_capacity`).
pub fn calculate_team_metrics(
    team: &TeamRecord,
    policy: &ScoringPolicy,
) -> Result<TeamMetrics, DomainError> {
    let current_staff: f64 = f64::from(team.current_staff);
    let queries_per_day: f64 = f64::from(team.queries_per_day);

    // Workload per agent
    let workload_step1: f64 = queries_per_day * team.average_query_time;
    let workload_per_agent: f64 = workload_step1 / current_staff;

    // Agent capacity
    let capacity_step1: f64 = team.shift_hours * MINUTES_PER_HOUR;
    let agent_capacity: f64 = capacity_step1 * (team.available_capacity / 100.0);

    if agent_capacity <= 0.0 {
        return Err(DomainError::ZeroAgentCapacity {
            team_id: team.team_id.clone(),
        });
    }

    // Utilization rate
    let utilization_rate: f64 = (workload_per_agent / agent_capacity) * 100.0;

    // Composite scheduling score
    let capacity_surplus_percentage: f64 =
        ((agent_capacity - workload_per_agent) / agent_capacity) * 100.0;
    let weighted_surplus: f64 = capacity_surplus_percentage * policy.surplus_weight;
    let weighted_efficiency: f64 = team.remote_infrastructure_efficiency * policy.efficiency_weight;
    let weighted_utilization: f64 = (100.0 - utilization_rate) * policy.utilization_weight;
    let composite_score: f64 = weighted_surplus + weighted_efficiency + weighted_utilization;

    // Staffing efficiency
    let required_staff: f64 = (queries_per_day * team.average_query_time) / agent_capacity;
    let staffing_efficiency_ratio: f64 = current_staff / required_staff;

    let derived: [(&'static str, f64); 12] = [
        ("workload_step1", workload_step1),
        ("workload_per_agent", workload_per_agent),
        ("capacity_step1", capacity_step1),
        ("agent_capacity", agent_capacity),
        ("utilization_rate", utilization_rate),
        ("capacity_surplus_percentage", capacity_surplus_percentage),
        ("weighted_surplus", weighted_surplus),
        ("weighted_efficiency", weighted_efficiency),
        ("weighted_utilization", weighted_utilization),
        ("composite_score", composite_score),
        ("required_staff", required_staff),
        ("staffing_efficiency_ratio", staffing_efficiency_ratio),
    ];
    if let Some(&(metric, _)) = derived.iter().find(|(_, value)| !value.is_finite()) {
        return Err(DomainError::NonFiniteMetric {
            team_id: team.team_id.clone(),
            metric,
        });
    }

    let status: StaffingStatus =
        if policy.is_optimal(composite_score, staffing_efficiency_ratio, utilization_rate) {
            StaffingStatus::Optimal
        } else {
            StaffingStatus::NeedsAdjustment
        };

    let recommendation: String = recommend(
        status,
        composite_score,
        staffing_efficiency_ratio,
        utilization_rate,
    );

    Ok(TeamMetrics {
        team: team.clone(),
        workload_step1,
        workload_per_agent,
        capacity_step1,
        agent_capacity,
        utilization_rate,
        capacity_surplus_percentage,
        weighted_surplus,
        weighted_efficiency,
        weighted_utilization,
        composite_score,
        required_staff,
        staffing_efficiency_ratio,
        status,
        recommendation,
    })
}

/// Builds the recommendation sentence for a verdict.
fn recommend(
    status: StaffingStatus,
    composite_score: f64,
    staffing_efficiency_ratio: f64,
    utilization_rate: f64,
) -> String {
    let action: &str = match status {
        StaffingStatus::Optimal => {
            "the team's scheduling is optimal. The recommendation is to maintain the current workforce distribution."
        }
        StaffingStatus::NeedsAdjustment => {
            "the team's scheduling requires adjustments. Consider reassigning workforce, adjusting shift timings, or enhancing remote infrastructure."
        }
    };

    format!(
        "Based on a Composite Score of {composite_score:.2}, a Staffing Efficiency Ratio of {staffing_efficiency_ratio:.2}, and a Utilization Rate of {utilization_rate:.2}%, {action}"
    )
}
