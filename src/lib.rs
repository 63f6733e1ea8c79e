// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, CookbookData, CostBreakdown, EstateSnapshot, HealthMetrics, HealthScore,
    IncidentData, InfrastructureData, LicensingData, PerUnitCosts, Platform, ReportSummary,
    RiskLevel, ScenarioResult, TeamData,
};

pub use crate::analysis::{
    compute_costs, compute_health, compute_health_with, compute_migration_cost, compute_scenario,
    compute_scenarios, generate_report, generate_report_with, per_unit_costs, recommendations,
};

pub use crate::config::{HealthThresholds, TcomapConfig};

pub use crate::errors::{TcomapError, TcomapResult};

pub use crate::io::loader::{load_snapshot, parse_snapshot, sample_snapshot};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
