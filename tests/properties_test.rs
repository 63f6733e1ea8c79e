//! Property-based tests for the cost model engine.
//!
//! These verify invariants that must hold for any non-negative snapshot:
//! - the total TCO is exactly the sum of its nine line items
//! - the debt tax is zero exactly when the multiplier is 1.0
//! - scenario lists are always sorted non-increasing by NPV
//! - breakeven is absent exactly when year 3 does not beat the current TCO
//! - the whole pipeline is deterministic

use proptest::prelude::*;
use tcomap::{
    compute_costs, compute_health, compute_scenarios, generate_report, CookbookData,
    EstateSnapshot, IncidentData, InfrastructureData, LicensingData, TeamData,
};

fn arb_snapshot() -> impl Strategy<Value = EstateSnapshot> {
    (
        (0.0f64..500_000.0, 0.0f64..100_000.0, 0.0f64..50.0, 0.0f64..10_000.0),
        (0.0f64..50_000.0, 0.0f64..20_000.0, 0.0f64..20_000.0, 0.0f64..20_000.0),
        (0.0f64..200.0, 0.0f64..500.0, 0.0f64..100.0, 0.0f64..400_000.0, 1.0f64..2.0),
        (0.0f64..100.0, 0.0f64..48.0, 0.0f64..10.0),
        (0.0f64..20_000_000.0, 0.0f64..1_000_000.0, 0.0f64..100_000.0, 0.0f64..2_000_000.0),
    )
        .prop_map(
            |(
                (total_nodes, active, servers, server_cost),
                (total_cookbooks, tier1, tier2, tier3),
                (engineers, part_time, allocation_pct, salary, benefits),
                (incidents, mttr, per_incident),
                (license, training, cicd, contractor),
            )| EstateSnapshot {
                infrastructure: InfrastructureData {
                    total_managed_nodes: total_nodes,
                    production_nodes: total_nodes * 0.75,
                    staging_nodes: total_nodes * 0.15,
                    development_nodes: total_nodes * 0.10,
                    server_count: servers,
                    monthly_server_cost: server_cost,
                    run_interval_minutes: 30.0,
                },
                cookbooks: CookbookData {
                    total_cookbooks,
                    unique_cookbook_names: total_cookbooks,
                    active_cookbooks: active,
                    tier1_simple: tier1,
                    tier2_standard: tier2,
                    tier3_complex: tier3,
                    avg_cookbooks_per_node: 10.0,
                },
                team: TeamData {
                    dedicated_engineers: engineers,
                    part_time_contributors: part_time,
                    part_time_allocation_pct: allocation_pct,
                    average_salary: salary,
                    benefits_multiplier: benefits,
                },
                incidents: IncidentData {
                    monthly_incidents: incidents,
                    average_mttr_hours: mttr,
                    engineers_per_incident: per_incident,
                },
                licensing: LicensingData {
                    annual_license_cost: license,
                    negotiated_rate_per_node: 55.0,
                    annual_training_budget: training,
                    monthly_cicd_cost: cicd,
                    annual_contractor_spend: contractor,
                },
            },
        )
}

proptest! {
    #[test]
    fn prop_total_tco_equals_component_sum(snapshot in arb_snapshot()) {
        let health = compute_health(&snapshot);
        let costs = compute_costs(&snapshot, &health);

        let component_sum = costs.licensing_cost
            + costs.infrastructure_cost
            + costs.platform_labor_cost
            + costs.distributed_labor_cost
            + costs.incident_cost
            + costs.technical_debt_tax
            + costs.training_cost
            + costs.contractor_cost
            + costs.opportunity_cost;
        prop_assert_eq!(costs.total_annual_tco, component_sum);
    }

    #[test]
    fn prop_debt_tax_zero_iff_unit_multiplier(snapshot in arb_snapshot()) {
        let health = compute_health(&snapshot);
        let costs = compute_costs(&snapshot, &health);

        if health.debt_multiplier == 1.0 {
            prop_assert_eq!(costs.technical_debt_tax, 0.0);
        } else {
            let base = costs.platform_labor_cost + costs.distributed_labor_cost;
            prop_assert_eq!(
                costs.technical_debt_tax,
                base * (health.debt_multiplier - 1.0)
            );
        }
    }

    #[test]
    fn prop_scenarios_sorted_by_npv(snapshot in arb_snapshot()) {
        let health = compute_health(&snapshot);
        let costs = compute_costs(&snapshot, &health);
        let scenarios = compute_scenarios(&snapshot, &costs);

        prop_assert_eq!(scenarios.len(), 4);
        for pair in scenarios.windows(2) {
            prop_assert!(pair[0].npv_3year >= pair[1].npv_3year);
        }
    }

    #[test]
    fn prop_breakeven_absent_iff_year3_not_cheaper(snapshot in arb_snapshot()) {
        let health = compute_health(&snapshot);
        let costs = compute_costs(&snapshot, &health);

        for scenario in compute_scenarios(&snapshot, &costs) {
            if scenario.year3_cost >= costs.total_annual_tco {
                prop_assert_eq!(scenario.breakeven_months, None);
            } else {
                let breakeven = scenario.breakeven_months;
                prop_assert!(breakeven.is_some());
                prop_assert!(breakeven.unwrap() > 0.0 || scenario.migration_cost == 0.0);
            }
        }
    }

    #[test]
    fn prop_pipeline_is_deterministic(snapshot in arb_snapshot()) {
        let first = generate_report(&snapshot);
        let second = generate_report(&snapshot);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_zero_nodes_zero_ratio(active in 0.0f64..100_000.0) {
        let snapshot = EstateSnapshot {
            cookbooks: CookbookData {
                active_cookbooks: active,
                ..CookbookData::default()
            },
            ..EstateSnapshot::default()
        };
        let health = compute_health(&snapshot);
        prop_assert_eq!(health.cookbook_ratio, 0.0);
        prop_assert_eq!(health.debt_multiplier, 1.0);
    }

    #[test]
    fn prop_per_unit_costs_always_finite(snapshot in arb_snapshot()) {
        let report = generate_report(&snapshot);
        prop_assert!(report.per_unit.per_node.is_finite());
        prop_assert!(report.per_unit.per_cookbook.is_finite());
        prop_assert!(report.per_unit.per_fte.is_finite());
    }
}
