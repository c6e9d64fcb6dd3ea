// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A five-team sample batch in JSON form.
pub const SAMPLE_INPUT: &str = r#"{
  "teams": [
    {
      "team_id": "TeamOmega",
      "current_staff": 10,
      "queries_per_day": 150,
      "average_query_time": 3.0,
      "shift_hours": 8,
      "available_capacity": 70,
      "remote_infrastructure_efficiency": 80
    },
    {
      "team_id": "TeamSigma",
      "current_staff": 12,
      "queries_per_day": 170,
      "average_query_time": 3.5,
      "shift_hours": 7,
      "available_capacity": 75,
      "remote_infrastructure_efficiency": 85
    },
    {
      "team_id": "TeamTheta",
      "current_staff": 8,
      "queries_per_day": 140,
      "average_query_time": 2.8,
      "shift_hours": 6,
      "available_capacity": 65,
      "remote_infrastructure_efficiency": 90
    },
    {
      "team_id": "TeamLambda",
      "current_staff": 11,
      "queries_per_day": 160,
      "average_query_time": 3.2,
      "shift_hours": 7.5,
      "available_capacity": 80,
      "remote_infrastructure_efficiency": 88
    },
    {
      "team_id": "TeamZeta",
      "current_staff": 9,
      "queries_per_day": 130,
      "average_query_time": 3.6,
      "shift_hours": 8,
      "available_capacity": 68,
      "remote_infrastructure_efficiency": 82
    }
  ]
}"#;
