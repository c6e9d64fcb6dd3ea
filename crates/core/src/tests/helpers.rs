// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workforce_domain::{RawRecord, RawValue};

pub fn create_test_record(team_id: &str, values: [f64; 6]) -> RawRecord {
    let [
        current_staff,
        queries_per_day,
        average_query_time,
        shift_hours,
        available_capacity,
        remote_infrastructure_efficiency,
    ] = values;

    RawRecord::new()
        .with("team_id", RawValue::text(team_id))
        .with("current_staff", current_staff)
        .with("queries_per_day", queries_per_day)
        .with("average_query_time", average_query_time)
        .with("shift_hours", shift_hours)
        .with("available_capacity", available_capacity)
        .with(
            "remote_infrastructure_efficiency",
            remote_infrastructure_efficiency,
        )
}

/// The five-team batch used across pipeline tests.
pub fn create_sample_batch() -> Vec<RawRecord> {
    vec![
        create_test_record("TeamOmega", [10.0, 150.0, 3.0, 8.0, 70.0, 80.0]),
        create_test_record("TeamSigma", [12.0, 170.0, 3.5, 7.0, 75.0, 85.0]),
        create_test_record("TeamTheta", [8.0, 140.0, 2.8, 6.0, 65.0, 90.0]),
        create_test_record("TeamLambda", [11.0, 160.0, 3.2, 7.5, 80.0, 88.0]),
        create_test_record("TeamZeta", [9.0, 130.0, 3.6, 8.0, 68.0, 82.0]),
    ]
}
