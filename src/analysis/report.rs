//! Report assembly: full pipeline composition plus per-unit costs and
//! recommendation strings.

use crate::analysis::costs::compute_costs;
use crate::analysis::health::compute_health_with;
use crate::analysis::scenario::compute_scenarios;
use crate::config::HealthThresholds;
use crate::core::types::{
    AnalysisReport, CostBreakdown, EstateSnapshot, HealthMetrics, PerUnitCosts, ReportSummary,
    ScenarioResult,
};

/// Per-unit views of the annual TCO. Denominators are clamped to 1 so a
/// degenerate snapshot still yields finite numbers.
pub fn per_unit_costs(snapshot: &EstateSnapshot, costs: &CostBreakdown) -> PerUnitCosts {
    let total = costs.total_annual_tco;
    PerUnitCosts {
        per_node: total / snapshot.infrastructure.total_managed_nodes.max(1.0),
        per_cookbook: total / snapshot.cookbooks.active_cookbooks.max(1.0),
        per_fte: total / snapshot.team.dedicated_engineers.max(1.0),
    }
}

/// Build the recommendation list. Checks run in a fixed order and each
/// appends independently; nothing is re-sorted or deduplicated.
pub fn recommendations(
    snapshot: &EstateSnapshot,
    health: &HealthMetrics,
    costs: &CostBreakdown,
    scenarios: &[ScenarioResult],
) -> Vec<String> {
    let mut recs = Vec::new();

    if health.cookbook_ratio > 100.0 {
        recs.push(format!(
            "CRITICAL: Consolidate cookbooks. Current ratio of {:.0}/1K nodes is unsustainable. \
             Target: <25/1K nodes through wrapper cookbook consolidation.",
            health.cookbook_ratio
        ));
    }

    if health.debt_multiplier >= 1.5 {
        recs.push(format!(
            "Technical debt is costing ${:.0}/year. Invest in cookbook consolidation to reduce \
             multiplier from {:.2}x to 1.00x.",
            costs.technical_debt_tax, health.debt_multiplier
        ));
    }

    // Scenarios arrive sorted descending by NPV, so the first entry is the
    // best candidate.
    if let Some(best) = scenarios.first() {
        if best.npv_3year > 0.0 {
            let breakeven = match best.breakeven_months {
                Some(months) => format!("{months:.0} months"),
                None => "beyond 3 years".to_string(),
            };
            recs.push(format!(
                "Consider {}. 3-year NPV: ${:.0}. Breakeven: {}. Risk: {}.",
                best.name,
                best.npv_3year,
                breakeven,
                best.risk.display_name()
            ));
        }
    }

    if snapshot.incidents.monthly_incidents > 20.0 {
        recs.push(format!(
            "High incident rate ({:.0}/month) suggests stability issues. Prioritize reliability \
             improvements before migration.",
            snapshot.incidents.monthly_incidents
        ));
    }

    recs
}

/// Run the full analysis pipeline on a snapshot with the standard health
/// thresholds.
///
/// Deterministic and idempotent: two calls with the same snapshot produce
/// identical reports, regardless of working directory or environment.
pub fn generate_report(snapshot: &EstateSnapshot) -> AnalysisReport {
    generate_report_with(snapshot, &HealthThresholds::default())
}

/// Run the full analysis pipeline with explicit health thresholds.
pub fn generate_report_with(
    snapshot: &EstateSnapshot,
    thresholds: &HealthThresholds,
) -> AnalysisReport {
    let health = compute_health_with(snapshot, thresholds);
    let costs = compute_costs(snapshot, &health);
    let per_unit = per_unit_costs(snapshot, &costs);
    let scenarios = compute_scenarios(snapshot, &costs);
    let recommendations = recommendations(snapshot, &health, &costs, &scenarios);

    let summary = ReportSummary {
        total_nodes: snapshot.infrastructure.total_managed_nodes,
        active_cookbooks: snapshot.cookbooks.active_cookbooks,
        annual_tco: costs.total_annual_tco,
        per_node_cost: per_unit.per_node,
        per_cookbook_cost: per_unit.per_cookbook,
        health_score: health.health_score,
    };

    AnalysisReport {
        summary,
        health,
        costs,
        per_unit,
        scenarios,
        recommendations,
    }
}
