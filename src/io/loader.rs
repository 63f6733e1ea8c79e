//! Snapshot loading: YAML deserialization, boundary validation, and the
//! built-in sample estate.
//!
//! Validation lives here, not in the engine. The engine silently computes
//! whatever arithmetic follows from its input (it cannot fail); this loader
//! is the one place where nonsensical input is rejected.

use std::path::Path;

use crate::core::types::{
    CookbookData, EstateSnapshot, IncidentData, InfrastructureData, LicensingData, TeamData,
};
use crate::errors::{TcomapError, TcomapResult};

/// Load and validate a snapshot from a YAML file.
pub fn load_snapshot(path: &Path) -> TcomapResult<EstateSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|source| TcomapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_snapshot(&content)?;
    log::info!("loaded snapshot from {}", path.display());
    Ok(snapshot)
}

/// Parse and validate a snapshot from YAML text.
pub fn parse_snapshot(content: &str) -> TcomapResult<EstateSnapshot> {
    let snapshot: EstateSnapshot =
        serde_yaml::from_str(content).map_err(|source| TcomapError::Parse { source })?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Reject negative numeric fields, naming the first offender.
pub fn validate_snapshot(snapshot: &EstateSnapshot) -> TcomapResult<()> {
    let fields = [
        (
            "infrastructure.total_managed_nodes",
            snapshot.infrastructure.total_managed_nodes,
        ),
        (
            "infrastructure.production_nodes",
            snapshot.infrastructure.production_nodes,
        ),
        (
            "infrastructure.staging_nodes",
            snapshot.infrastructure.staging_nodes,
        ),
        (
            "infrastructure.development_nodes",
            snapshot.infrastructure.development_nodes,
        ),
        (
            "infrastructure.server_count",
            snapshot.infrastructure.server_count,
        ),
        (
            "infrastructure.monthly_server_cost",
            snapshot.infrastructure.monthly_server_cost,
        ),
        (
            "infrastructure.run_interval_minutes",
            snapshot.infrastructure.run_interval_minutes,
        ),
        ("cookbooks.total_cookbooks", snapshot.cookbooks.total_cookbooks),
        (
            "cookbooks.unique_cookbook_names",
            snapshot.cookbooks.unique_cookbook_names,
        ),
        ("cookbooks.active_cookbooks", snapshot.cookbooks.active_cookbooks),
        ("cookbooks.tier1_simple", snapshot.cookbooks.tier1_simple),
        ("cookbooks.tier2_standard", snapshot.cookbooks.tier2_standard),
        ("cookbooks.tier3_complex", snapshot.cookbooks.tier3_complex),
        (
            "cookbooks.avg_cookbooks_per_node",
            snapshot.cookbooks.avg_cookbooks_per_node,
        ),
        ("team.dedicated_engineers", snapshot.team.dedicated_engineers),
        (
            "team.part_time_contributors",
            snapshot.team.part_time_contributors,
        ),
        (
            "team.part_time_allocation_pct",
            snapshot.team.part_time_allocation_pct,
        ),
        ("team.average_salary", snapshot.team.average_salary),
        ("team.benefits_multiplier", snapshot.team.benefits_multiplier),
        ("incidents.monthly_incidents", snapshot.incidents.monthly_incidents),
        (
            "incidents.average_mttr_hours",
            snapshot.incidents.average_mttr_hours,
        ),
        (
            "incidents.engineers_per_incident",
            snapshot.incidents.engineers_per_incident,
        ),
        (
            "licensing.annual_license_cost",
            snapshot.licensing.annual_license_cost,
        ),
        (
            "licensing.negotiated_rate_per_node",
            snapshot.licensing.negotiated_rate_per_node,
        ),
        (
            "licensing.annual_training_budget",
            snapshot.licensing.annual_training_budget,
        ),
        ("licensing.monthly_cicd_cost", snapshot.licensing.monthly_cicd_cost),
        (
            "licensing.annual_contractor_spend",
            snapshot.licensing.annual_contractor_spend,
        ),
    ];

    for (name, value) in fields {
        if value < 0.0 {
            return Err(TcomapError::Validation {
                field: name.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Built-in sample estate: 200K nodes, 90K cookbooks, 45 dedicated engineers.
/// Doubles as the reference scenario for the integration tests.
pub fn sample_snapshot() -> EstateSnapshot {
    EstateSnapshot {
        infrastructure: InfrastructureData {
            total_managed_nodes: 200_000.0,
            production_nodes: 150_000.0,
            staging_nodes: 30_000.0,
            development_nodes: 20_000.0,
            server_count: 12.0,
            monthly_server_cost: 4000.0,
            run_interval_minutes: 30.0,
        },
        cookbooks: CookbookData {
            total_cookbooks: 90_000.0,
            unique_cookbook_names: 15_000.0,
            active_cookbooks: 12_000.0,
            tier1_simple: 7200.0,
            tier2_standard: 3600.0,
            tier3_complex: 1200.0,
            avg_cookbooks_per_node: 8.0,
        },
        team: TeamData {
            dedicated_engineers: 45.0,
            part_time_contributors: 120.0,
            part_time_allocation_pct: 20.0,
            average_salary: 165_000.0,
            benefits_multiplier: 1.4,
        },
        incidents: IncidentData {
            monthly_incidents: 25.0,
            average_mttr_hours: 6.0,
            engineers_per_incident: 2.5,
        },
        licensing: LicensingData {
            annual_license_cost: 11_000_000.0,
            negotiated_rate_per_node: 55.0,
            annual_training_budget: 150_000.0,
            monthly_cicd_cost: 15_000.0,
            annual_contractor_spend: 500_000.0,
        },
    }
}

/// Commented sample input written by `tcomap init`.
pub const SAMPLE_INPUT_YAML: &str = r#"# tcomap estate snapshot
#
# Every field is optional; omitted fields fall back to documented defaults.
# Numeric fields also accept the survey-export form `{ value: N, confidence: high }`.

infrastructure:
  total_managed_nodes: 200000
  production_nodes: 150000
  staging_nodes: 30000
  development_nodes: 20000
  server_count: 12
  monthly_server_cost: 4000
  run_interval_minutes: 30

cookbooks:
  total_cookbooks: 90000
  unique_cookbook_names: 15000
  active_cookbooks: 12000
  tier1_simple: 7200
  tier2_standard: 3600
  tier3_complex: 1200
  avg_cookbooks_per_node: 8

team:
  dedicated_engineers: 45
  part_time_contributors: 120
  part_time_allocation_pct: 20
  average_salary: 165000
  benefits_multiplier: 1.4

incidents:
  monthly_incidents: 25
  average_mttr_hours: 6
  engineers_per_incident: 2.5

licensing:
  annual_license_cost: 11000000
  negotiated_rate_per_node: 55
  annual_training_budget: 150000
  monthly_cicd_cost: 15000
  annual_contractor_spend: 500000
"#;
