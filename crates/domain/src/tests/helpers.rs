// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RawRecord, RawValue, TeamRecord};

/// Builds a raw record the way a CSV row would arrive: every value as text.
pub fn create_test_raw_record(
    team_id: &str,
    current_staff: &str,
    queries_per_day: &str,
    average_query_time: &str,
    shift_hours: &str,
    available_capacity: &str,
    remote_infrastructure_efficiency: &str,
) -> RawRecord {
    RawRecord::new()
        .with("team_id", RawValue::text(team_id))
        .with("current_staff", RawValue::text(current_staff))
        .with("queries_per_day", RawValue::text(queries_per_day))
        .with("average_query_time", RawValue::text(average_query_time))
        .with("shift_hours", RawValue::text(shift_hours))
        .with("available_capacity", RawValue::text(available_capacity))
        .with(
            "remote_infrastructure_efficiency",
            RawValue::text(remote_infrastructure_efficiency),
        )
}

/// The reference team used throughout the metrics tests.
pub fn create_omega_raw_record() -> RawRecord {
    create_test_raw_record("TeamOmega", "10", "150", "3.0", "8", "70", "80")
}

pub fn create_omega_team() -> TeamRecord {
    TeamRecord {
        team_id: String::from("TeamOmega"),
        current_staff: 10,
        queries_per_day: 150,
        average_query_time: 3.0,
        shift_hours: 8.0,
        available_capacity: 70.0,
        remote_infrastructure_efficiency: 80.0,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
