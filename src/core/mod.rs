pub mod benchmarks;
pub mod de;
pub mod types;

pub use types::{
    AnalysisReport, CookbookData, CostBreakdown, EstateSnapshot, HealthMetrics, HealthScore,
    IncidentData, InfrastructureData, LicensingData, PerUnitCosts, Platform, ReportSummary,
    RiskLevel, ScenarioResult, TeamData,
};
