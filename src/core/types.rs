//! Common type definitions for the TCO engine: the input snapshot, the
//! derived entities, and the categorical enums shared across the codebase.
//!
//! Every derived entity is recomputed fresh from an [`EstateSnapshot`] on each
//! call; nothing here carries identity or lifecycle beyond single-call
//! construction.

use serde::{Deserialize, Serialize};

use crate::core::de::flexible_f64;

/// Infrastructure configuration data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfrastructureData {
    #[serde(deserialize_with = "flexible_f64")]
    pub total_managed_nodes: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub production_nodes: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub staging_nodes: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub development_nodes: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub server_count: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub monthly_server_cost: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub run_interval_minutes: f64,
}

impl Default for InfrastructureData {
    fn default() -> Self {
        Self {
            total_managed_nodes: 0.0,
            production_nodes: 0.0,
            staging_nodes: 0.0,
            development_nodes: 0.0,
            server_count: 1.0,
            monthly_server_cost: 4000.0,
            run_interval_minutes: 30.0,
        }
    }
}

/// Cookbook estate composition data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookData {
    #[serde(deserialize_with = "flexible_f64")]
    pub total_cookbooks: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub unique_cookbook_names: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub active_cookbooks: f64,
    /// Simple cookbooks (templates, attributes only).
    #[serde(deserialize_with = "flexible_f64")]
    pub tier1_simple: f64,
    /// Standard cookbooks (resources, light logic).
    #[serde(deserialize_with = "flexible_f64")]
    pub tier2_standard: f64,
    /// Complex cookbooks (custom resources, heavy logic, search).
    #[serde(deserialize_with = "flexible_f64")]
    pub tier3_complex: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub avg_cookbooks_per_node: f64,
}

impl Default for CookbookData {
    fn default() -> Self {
        Self {
            total_cookbooks: 0.0,
            unique_cookbook_names: 0.0,
            active_cookbooks: 0.0,
            tier1_simple: 0.0,
            tier2_standard: 0.0,
            tier3_complex: 0.0,
            avg_cookbooks_per_node: 10.0,
        }
    }
}

/// Team and labor data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamData {
    #[serde(deserialize_with = "flexible_f64")]
    pub dedicated_engineers: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub part_time_contributors: f64,
    /// Fraction of a part-time contributor's year spent on the platform,
    /// expressed as a percentage (20.0 = one day a week).
    #[serde(deserialize_with = "flexible_f64")]
    pub part_time_allocation_pct: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub average_salary: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub benefits_multiplier: f64,
}

impl Default for TeamData {
    fn default() -> Self {
        Self {
            dedicated_engineers: 0.0,
            part_time_contributors: 0.0,
            part_time_allocation_pct: 20.0,
            average_salary: 165_000.0,
            benefits_multiplier: 1.4,
        }
    }
}

/// Incident and reliability data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentData {
    #[serde(deserialize_with = "flexible_f64")]
    pub monthly_incidents: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub average_mttr_hours: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub engineers_per_incident: f64,
}

impl Default for IncidentData {
    fn default() -> Self {
        Self {
            monthly_incidents: 0.0,
            average_mttr_hours: 6.0,
            engineers_per_incident: 2.5,
        }
    }
}

/// Licensing and financial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingData {
    #[serde(deserialize_with = "flexible_f64")]
    pub annual_license_cost: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub negotiated_rate_per_node: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub annual_training_budget: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub monthly_cicd_cost: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub annual_contractor_spend: f64,
}

impl Default for LicensingData {
    fn default() -> Self {
        Self {
            annual_license_cost: 0.0,
            negotiated_rate_per_node: 55.0,
            annual_training_budget: 0.0,
            monthly_cicd_cost: 0.0,
            annual_contractor_spend: 0.0,
        }
    }
}

/// Complete organization snapshot for one TCO analysis. Immutable per call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstateSnapshot {
    pub infrastructure: InfrastructureData,
    pub cookbooks: CookbookData,
    pub team: TeamData,
    pub incidents: IncidentData,
    pub licensing: LicensingData,
}

impl EstateSnapshot {
    /// Dedicated engineers plus the FTE-equivalent of part-time contributors.
    pub fn total_fte(&self) -> f64 {
        self.team.dedicated_engineers
            + self.team.part_time_contributors * (self.team.part_time_allocation_pct / 100.0)
    }

    /// Salary with the benefits multiplier applied.
    pub fn fully_loaded_salary(&self) -> f64 {
        self.team.average_salary * self.team.benefits_multiplier
    }
}

/// Categorical estate health assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthScore {
    Healthy,
    Warning,
    Critical,
}

impl HealthScore {
    /// Get the display name for this score
    pub fn display_name(&self) -> &'static str {
        match self {
            HealthScore::Healthy => "healthy",
            HealthScore::Warning => "warning",
            HealthScore::Critical => "critical",
        }
    }
}

/// Estate health assessment metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Active cookbooks per 1,000 managed nodes.
    pub cookbook_ratio: f64,
    pub cookbooks_per_fte: f64,
    /// Labor amplification factor looked up from the cookbook ratio.
    pub debt_multiplier: f64,
    pub health_score: HealthScore,
    pub issues: Vec<String>,
}

/// Annual cost breakdown. The three aggregates are materialized as fields so
/// every serializer and consumer sees them without recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub licensing_cost: f64,
    pub infrastructure_cost: f64,
    pub platform_labor_cost: f64,
    pub distributed_labor_cost: f64,
    pub incident_cost: f64,
    pub technical_debt_tax: f64,
    pub training_cost: f64,
    pub contractor_cost: f64,
    pub opportunity_cost: f64,
    /// licensing + infrastructure
    pub direct_costs: f64,
    /// platform + distributed + incident labor
    pub labor_costs: f64,
    /// Sum of all nine line items.
    pub total_annual_tco: f64,
}

/// Alternative platforms considered by the scenario set. The per-node rates,
/// migration-effort factors, and risk levels are a fixed benchmark table, not
/// computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ansible,
    Kubernetes,
    Terraform,
    Puppet,
}

impl Platform {
    /// All platforms, in the order scenarios are computed (before NPV sorting).
    pub const ALL: [Platform; 4] = [
        Platform::Ansible,
        Platform::Kubernetes,
        Platform::Terraform,
        Platform::Puppet,
    ];

    /// Get the display name for this platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ansible => "Ansible",
            Platform::Kubernetes => "Kubernetes",
            Platform::Terraform => "Terraform",
            Platform::Puppet => "Puppet",
        }
    }
}

/// Qualitative migration risk. Hardcoded per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Get the display name for this risk level
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Result of one migration scenario analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub platform: Platform,
    pub name: String,
    /// One-time migration cost (labor, training, learning curve, tooling).
    pub migration_cost: f64,
    pub year1_cost: f64,
    pub year2_cost: f64,
    pub year3_cost: f64,
    pub three_year_total: f64,
    /// Months until cumulative year-3 run-rate savings offset the migration
    /// cost. `None` when the scenario never pays back at steady state.
    pub breakeven_months: Option<f64>,
    pub npv_3year: f64,
    pub risk: RiskLevel,
    /// Current annual TCO minus year-3 cost. Negative when the scenario costs
    /// more at steady state than staying put.
    pub annual_savings: f64,
    /// Savings against the flat 3x current-state baseline, in percent.
    pub savings_pct: f64,
}

/// Per-unit cost views. Denominators are clamped to a minimum of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerUnitCosts {
    pub per_node: f64,
    pub per_cookbook: f64,
    pub per_fte: f64,
}

/// Executive summary scalars duplicated at the top of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_nodes: f64,
    pub active_cookbooks: f64,
    pub annual_tco: f64,
    pub per_node_cost: f64,
    pub per_cookbook_cost: f64,
    pub health_score: HealthScore,
}

/// Complete TCO analysis report. Deterministic for a given snapshot: carries
/// no timestamps or other environment-derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,
    pub health: HealthMetrics,
    pub costs: CostBreakdown,
    pub per_unit: PerUnitCosts,
    /// Sorted descending by 3-year NPV.
    pub scenarios: Vec<ScenarioResult>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fte_combines_dedicated_and_part_time() {
        let snapshot = EstateSnapshot {
            team: TeamData {
                dedicated_engineers: 45.0,
                part_time_contributors: 120.0,
                part_time_allocation_pct: 20.0,
                ..TeamData::default()
            },
            ..EstateSnapshot::default()
        };
        assert_eq!(snapshot.total_fte(), 69.0);
    }

    #[test]
    fn test_fully_loaded_salary() {
        let snapshot = EstateSnapshot {
            team: TeamData {
                average_salary: 165_000.0,
                benefits_multiplier: 1.4,
                ..TeamData::default()
            },
            ..EstateSnapshot::default()
        };
        assert_eq!(snapshot.fully_loaded_salary(), 231_000.0);
    }

    #[test]
    fn test_section_defaults_carry_documented_values() {
        let snapshot = EstateSnapshot::default();
        assert_eq!(snapshot.infrastructure.server_count, 1.0);
        assert_eq!(snapshot.infrastructure.monthly_server_cost, 4000.0);
        assert_eq!(snapshot.cookbooks.avg_cookbooks_per_node, 10.0);
        assert_eq!(snapshot.team.average_salary, 165_000.0);
        assert_eq!(snapshot.incidents.engineers_per_incident, 2.5);
        assert_eq!(snapshot.licensing.negotiated_rate_per_node, 55.0);
    }

    #[test]
    fn test_health_score_ordering() {
        assert!(HealthScore::Healthy < HealthScore::Warning);
        assert!(HealthScore::Warning < HealthScore::Critical);
    }

    #[test]
    fn test_platform_display_names() {
        assert_eq!(Platform::Ansible.display_name(), "Ansible");
        assert_eq!(Platform::Kubernetes.display_name(), "Kubernetes");
        assert_eq!(Platform::Terraform.display_name(), "Terraform");
        assert_eq!(Platform::Puppet.display_name(), "Puppet");
    }

    #[test]
    fn test_platform_serde_lowercase() {
        let json = serde_json::to_string(&Platform::Terraform).unwrap();
        assert_eq!(json, "\"terraform\"");
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::Terraform);
    }
}
