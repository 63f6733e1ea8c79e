//! Annual cost breakdown: direct, labor, hidden, and other costs.

use crate::core::benchmarks::{ANNUAL_WORK_HOURS, OPPORTUNITY_COST_RATE};
use crate::core::types::{CostBreakdown, EstateSnapshot, HealthMetrics};

/// Compute the annual cost breakdown for a snapshot.
///
/// All arithmetic is linear combination over the snapshot fields; missing or
/// zero inputs contribute zero. Nothing is rounded here: presentation owns
/// all formatting.
pub fn compute_costs(snapshot: &EstateSnapshot, health: &HealthMetrics) -> CostBreakdown {
    // Direct costs. Licensing comes straight from the snapshot annual figure,
    // never recomputed from the negotiated per-node rate.
    let licensing_cost = snapshot.licensing.annual_license_cost;
    let infrastructure_cost = snapshot.infrastructure.server_count
        * snapshot.infrastructure.monthly_server_cost
        * 12.0
        + snapshot.licensing.monthly_cicd_cost * 12.0;

    // Labor costs.
    let fully_loaded_salary = snapshot.fully_loaded_salary();
    let platform_labor_cost = snapshot.team.dedicated_engineers * fully_loaded_salary;
    let distributed_labor_cost = snapshot.team.part_time_contributors
        * (snapshot.team.part_time_allocation_pct / 100.0)
        * fully_loaded_salary;

    let hourly_rate = fully_loaded_salary / ANNUAL_WORK_HOURS;
    let incident_cost = snapshot.incidents.monthly_incidents
        * 12.0
        * snapshot.incidents.average_mttr_hours
        * snapshot.incidents.engineers_per_incident
        * hourly_rate;

    // The debt tax amplifies platform and distributed labor only, never the
    // incident line.
    let base_labor = platform_labor_cost + distributed_labor_cost;
    let technical_debt_tax = base_labor * (health.debt_multiplier - 1.0);

    let training_cost = snapshot.licensing.annual_training_budget;
    let contractor_cost = snapshot.licensing.annual_contractor_spend;

    let labor_costs = platform_labor_cost + distributed_labor_cost + incident_cost;
    let opportunity_cost = labor_costs * OPPORTUNITY_COST_RATE;

    let direct_costs = licensing_cost + infrastructure_cost;
    let total_annual_tco = licensing_cost
        + infrastructure_cost
        + platform_labor_cost
        + distributed_labor_cost
        + incident_cost
        + technical_debt_tax
        + training_cost
        + contractor_cost
        + opportunity_cost;

    CostBreakdown {
        licensing_cost,
        infrastructure_cost,
        platform_labor_cost,
        distributed_labor_cost,
        incident_cost,
        technical_debt_tax,
        training_cost,
        contractor_cost,
        opportunity_cost,
        direct_costs,
        labor_costs,
        total_annual_tco,
    }
}
