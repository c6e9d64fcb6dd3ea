// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use workforce_domain::ScoringPolicy;

/// The CSV header line in schema order.
pub const CSV_HEADER: &str = "team_id,current_staff,queries_per_day,average_query_time,shift_hours,available_capacity,remote_infrastructure_efficiency";

/// Builds CSV input from the header and the given data rows.
pub fn create_test_csv(rows: &[&str]) -> String {
    let mut lines: Vec<&str> = vec![CSV_HEADER];
    lines.extend_from_slice(rows);
    lines.join("\n")
}

/// Builds single-record JSON input for a team with the reference values.
pub fn create_test_json_team(team_id: &str) -> String {
    format!(
        r#"{{"team_id": "{team_id}", "current_staff": 10, "queries_per_day": 150, "average_query_time": 3.0, "shift_hours": 8, "available_capacity": 70, "remote_infrastructure_efficiency": 80}}"#
    )
}

/// A policy under which a fully utilized team is optimal.
pub const fn create_relaxed_policy() -> ScoringPolicy {
    ScoringPolicy {
        min_composite_score: 25.0,
        max_utilization_rate: 100.0,
        ..ScoringPolicy::DEFAULT
    }
}
