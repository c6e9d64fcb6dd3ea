// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text rendering of validation reports and batch analyses.
//!
//! Rendering is pure: the output depends only on the report, the metrics
//! and the scoring policy they were calculated under. Values are shown with
//! two decimals, except the raw utilization fraction which uses four.

use workforce_domain::{DomainError, ScoringPolicy, TeamMetrics, ValidationReport};
use workforce_optimizer::{BatchAnalysis, CoreError};

/// Closing prompt appended to every successful analysis.
pub const FEEDBACK_PROMPT: &str = "Would you like detailed calculations for any specific team? Please rate this analysis on a scale of 1-5.";

/// Renders a validation report as newline-joined text.
#[must_use]
pub fn render_validation_report(report: &ValidationReport) -> String {
    report.lines().join("\n")
}

/// Renders a successful batch analysis.
///
/// The validation report comes first, followed by a blank line and the
/// per-team analysis.
///
/// # Arguments
///
/// * `analysis` - The analysis produced by the pipeline
/// * `policy` - The policy the analysis was scored under
#[must_use]
pub fn render_analysis(analysis: &BatchAnalysis, policy: &ScoringPolicy) -> String {
    format!(
        "{}\n\n{}",
        render_validation_report(&analysis.validation),
        render_team_report(&analysis.metrics, policy)
    )
}

/// Renders the per-team analysis report.
#[must_use]
pub fn render_team_report(metrics: &[TeamMetrics], policy: &ScoringPolicy) -> String {
    let mut lines: Vec<String> = vec![
        String::from("# Workforce Distribution Summary:"),
        format!("Total Teams Evaluated: {}", metrics.len()),
        String::new(),
    ];

    for team in metrics {
        render_team(&mut lines, team, policy);
    }

    lines.push(String::from("# FEEDBACK AND RATING PROTOCOL"));
    lines.push(String::from(FEEDBACK_PROMPT));

    lines.join("\n")
}

/// Renders a pipeline rejection.
///
/// Validation failures render as the validation report alone. Calculation
/// failures render the (passing) validation report followed by one line
/// per failed team.
#[must_use]
pub fn render_core_error(err: &CoreError) -> String {
    match err {
        CoreError::InvalidPolicy(domain) => format!("ERROR: {domain}"),
        CoreError::ValidationFailed(report) => render_validation_report(report),
        CoreError::CalculationFailed { report, errors } => {
            let mut lines: Vec<String> = report.lines();
            lines.push(String::new());
            lines.push(String::from("## Calculation Errors:"));
            lines.extend(errors.iter().map(|e: &DomainError| format!("- ERROR: {e}")));
            lines.push(String::new());
            lines.push(String::from("Please correct and resubmit this data again."));
            lines.join("\n")
        }
    }
}

fn render_team(lines: &mut Vec<String>, m: &TeamMetrics, policy: &ScoringPolicy) {
    render_inputs(lines, m);
    lines.push(String::from("# Detailed Calculations:"));

    render_workload(lines, m);
    render_capacity(lines, m);
    render_utilization(lines, m);
    render_composite_score(lines, m, policy);
    render_staffing(lines, m);
    render_recommendation(lines, m);
}

fn render_inputs(lines: &mut Vec<String>, m: &TeamMetrics) {
    lines.push(String::from("# Detailed Analysis per Team:"));
    lines.push(format!("Team {}", m.team.team_id));
    lines.push(String::from("Input Data:"));
    lines.push(format!(" - Current Staff: {}", m.team.current_staff));
    lines.push(format!(" - Queries Per Day: {}", m.team.queries_per_day));
    lines.push(format!(
        " - Average Query Time (minutes): {:.2}",
        m.team.average_query_time
    ));
    lines.push(format!(" - Shift Hours: {:.2}", m.team.shift_hours));
    lines.push(format!(
        " - Available Capacity (%): {:.2}",
        m.team.available_capacity
    ));
    lines.push(format!(
        " - Remote Infrastructure Efficiency (%): {:.2}",
        m.team.remote_infrastructure_efficiency
    ));
    lines.push(String::new());
}

fn render_workload(lines: &mut Vec<String>, m: &TeamMetrics) {
    let current_staff: f64 = f64::from(m.team.current_staff);
    let queries_per_day: f64 = f64::from(m.team.queries_per_day);

    lines.push(String::from("## 1. Workload per Agent Calculation:"));
    lines.push(String::from(
        r" - Formula: $$ \text{Workload per Agent} = \frac{\text{queries_per_day} \times \text{average_query_time}}{\text{current_staff}} $$",
    ));
    lines.push(String::from(" - Calculation Steps:"));
    lines.push(format!(
        "   Step 1: Multiply queries_per_day by average_query_time: {queries_per_day:.2} × {:.2} = {:.2}",
        m.team.average_query_time, m.workload_step1
    ));
    lines.push(format!(
        "   Step 2: Divide the result by current_staff: {:.2} ÷ {current_staff:.2} = {:.2}",
        m.workload_step1, m.workload_per_agent
    ));
    lines.push(format!(
        " - Final Workload per Agent: {:.2}",
        m.workload_per_agent
    ));
    lines.push(String::new());
}

fn render_capacity(lines: &mut Vec<String>, m: &TeamMetrics) {
    lines.push(String::from("## 2. Agent Capacity Calculation:"));
    lines.push(String::from(
        r" - Formula: $$ \text{Agent Capacity} = \text{shift_hours} \times 60 \times \frac{\text{available_capacity}}{100} $$",
    ));
    lines.push(String::from(" - Calculation Steps:"));
    lines.push(format!(
        "   Step 1: Multiply shift_hours by 60: {:.2} × 60 = {:.2}",
        m.team.shift_hours, m.capacity_step1
    ));
    lines.push(format!(
        "   Step 2: Multiply the result by (available_capacity/100): {:.2} × ({:.2}/100) = {:.2}",
        m.capacity_step1, m.team.available_capacity, m.agent_capacity
    ));
    lines.push(format!(" - Final Agent Capacity: {:.2}", m.agent_capacity));
    lines.push(String::new());
}

fn render_utilization(lines: &mut Vec<String>, m: &TeamMetrics) {
    let fraction: f64 = m.utilization_fraction();
    lines.push(String::from("## 3. Utilization Rate Calculation:"));
    lines.push(String::from(
        r" - Formula: $$ \text{Utilization Rate} = \frac{\text{Workload per Agent}}{\text{Agent Capacity}} \times 100 $$",
    ));
    lines.push(String::from(" - Calculation Steps:"));
    lines.push(format!(
        "   Step 1: Divide Workload per Agent by Agent Capacity: {:.2} ÷ {:.2} = {fraction:.4}",
        m.workload_per_agent, m.agent_capacity
    ));
    lines.push(format!(
        "   Step 2: Multiply the result by 100: {fraction:.4} × 100 = {:.2}",
        m.utilization_rate
    ));
    lines.push(format!(
        " - Final Utilization Rate: {:.2}%",
        m.utilization_rate
    ));
    lines.push(String::new());
}

/// Weights are taken from the policy the metrics were scored under.
fn render_composite_score(lines: &mut Vec<String>, m: &TeamMetrics, policy: &ScoringPolicy) {
    lines.push(String::from("## 4. Composite Scheduling Score Calculation:"));
    lines.push(String::from(" - Step 1: Calculate Capacity Surplus Percentage:"));
    lines.push(String::from(
        r" $$ \text{Capacity Surplus Percentage} = \frac{(\text{Agent Capacity} - \text{Workload per Agent})}{\text{Agent Capacity}} \times 100 $$",
    ));
    lines.push(format!(
        "   Calculation: ({:.2} - {:.2}) ÷ {:.2} × 100 = {:.2}%",
        m.agent_capacity, m.workload_per_agent, m.agent_capacity, m.capacity_surplus_percentage
    ));
    lines.push(format!(
        " - Step 2: Multiply the Capacity Surplus Percentage by {}: {:.2} × {} = {:.2}",
        policy.surplus_weight,
        m.capacity_surplus_percentage,
        policy.surplus_weight,
        m.weighted_surplus
    ));
    lines.push(format!(
        " - Step 3: Multiply remote_infrastructure_efficiency by {}: {:.2} × {} = {:.2}",
        policy.efficiency_weight,
        m.team.remote_infrastructure_efficiency,
        policy.efficiency_weight,
        m.weighted_efficiency
    ));
    lines.push(format!(
        " - Step 4: Subtract the Utilization Rate from 100, then multiply by {}: (100 - {:.2}) × {} = {:.2}",
        policy.utilization_weight,
        m.utilization_rate,
        policy.utilization_weight,
        m.weighted_utilization
    ));
    lines.push(String::from(" - Step 5: Sum the weighted values:"));
    lines.push(format!(
        r" $$ \text{{Composite Score}} = (\text{{Capacity Surplus Percentage}} \times {}) + (\text{{remote_infrastructure_efficiency}} \times {}) + ((100 - \text{{Utilization Rate}}) \times {}) $$",
        policy.surplus_weight, policy.efficiency_weight, policy.utilization_weight
    ));
    lines.push(format!(
        "   Calculation: {:.2} + {:.2} + {:.2} = {:.2}",
        m.weighted_surplus, m.weighted_efficiency, m.weighted_utilization, m.composite_score
    ));
    lines.push(format!(
        " - Final Composite Score: {:.2}",
        m.composite_score
    ));
    lines.push(String::new());
}

fn render_staffing(lines: &mut Vec<String>, m: &TeamMetrics) {
    let current_staff: f64 = f64::from(m.team.current_staff);
    let queries_per_day: f64 = f64::from(m.team.queries_per_day);

    lines.push(String::from("## 5. Staffing Efficiency Calculation:"));
    lines.push(String::from(" - Formula for Required Staff:"));
    lines.push(String::from(
        r" $$ \text{Required Staff} = \frac{\text{queries_per_day} \times \text{average_query_time}}{\text{Agent Capacity}} $$",
    ));
    lines.push(format!(
        "   Calculation: ({queries_per_day:.2} × {:.2}) ÷ {:.2} = {:.2}",
        m.team.average_query_time, m.agent_capacity, m.required_staff
    ));
    lines.push(String::from(" - Formula for Staffing Efficiency Ratio:"));
    lines.push(String::from(
        r" $$ \text{Staffing Efficiency Ratio} = \frac{\text{current_staff}}{\text{Required Staff}} $$",
    ));
    lines.push(format!(
        "   Calculation: {current_staff:.2} ÷ {:.2} = {:.2}",
        m.required_staff, m.staffing_efficiency_ratio
    ));
    lines.push(format!(
        " - Final Staffing Efficiency Ratio: {:.2}",
        m.staffing_efficiency_ratio
    ));
    lines.push(String::new());
}

fn render_recommendation(lines: &mut Vec<String>, m: &TeamMetrics) {
    lines.push(String::from("# Final Recommendation per Team:"));
    lines.push(format!(" - Composite Score: {:.2}", m.composite_score));
    lines.push(format!(" - Utilization Rate: {:.2}%", m.utilization_rate));
    lines.push(format!(
        " - Staffing Efficiency Ratio: {:.2}",
        m.staffing_efficiency_ratio
    ));
    lines.push(format!(" - Status: {}", m.status));
    lines.push(format!(" - Recommended Action: {}", m.recommendation));
    lines.push(String::new());
}
