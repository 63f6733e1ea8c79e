//! Static benchmark tables driving the cost model.
//!
//! These are process-wide read-only constants, fixed at build time and never
//! mutated. All lookups are first-match scans over small ordered tables.

use crate::core::types::{Platform, RiskLevel};

/// Standard annual work hours for one FTE.
pub const ANNUAL_WORK_HOURS: f64 = 2080.0;

/// Annual discount rate applied to future savings in the NPV calculation.
pub const DISCOUNT_RATE: f64 = 0.10;

/// Fraction of labor cost counted as opportunity cost. A flat heuristic, not
/// derived from any marginal-value model.
pub const OPPORTUNITY_COST_RATE: f64 = 0.15;

/// Assumed labor reduction once a migration stabilizes.
pub const LABOR_REDUCTION: f64 = 0.30;

/// Assumed fraction of current infrastructure cost retained after migration.
pub const INFRA_RETENTION: f64 = 0.70;

/// Base migration hours per cookbook, by complexity tier.
pub const TIER1_HOURS: f64 = 4.0;
pub const TIER2_HOURS: f64 = 16.0;
pub const TIER3_HOURS: f64 = 40.0;

/// Flat onboarding hours per dedicated engineer when switching platforms.
pub const ONBOARDING_HOURS: f64 = 80.0;

/// Productivity loss fraction during the learning curve, applied as a lump
/// cost against half a year of fully-loaded salary per engineer.
pub const LEARNING_CURVE_PENALTY: f64 = 0.20;

/// Tooling and setup estimate as a fraction of migration labor cost.
pub const TOOLING_FRACTION: f64 = 0.10;

/// Debt multiplier step table: `(upper bound on cookbook ratio, multiplier)`.
/// Scanned in ascending order of upper bound; the first row whose bound is
/// not exceeded wins. The final unbounded row catches everything else.
pub const DEBT_MULTIPLIER_STEPS: [(f64, f64); 6] = [
    (25.0, 1.0),
    (50.0, 1.1),
    (100.0, 1.25),
    (250.0, 1.5),
    (500.0, 2.0),
    (f64::INFINITY, 2.5),
];

/// First-match lookup of the debt multiplier for a cookbook ratio.
pub fn debt_multiplier(cookbook_ratio: f64) -> f64 {
    for (upper_bound, multiplier) in DEBT_MULTIPLIER_STEPS {
        if cookbook_ratio <= upper_bound {
            return multiplier;
        }
    }
    // Unreachable for finite input; NaN falls through to the maximum tier.
    2.5
}

/// Per-platform benchmark rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformRates {
    /// Annual licensing/tooling cost per managed node.
    pub per_node_cost: f64,
    /// Multiplier on base migration hours.
    pub migration_factor: f64,
    pub risk: RiskLevel,
}

/// Static per-platform rate table.
pub fn platform_rates(platform: Platform) -> PlatformRates {
    match platform {
        Platform::Ansible => PlatformRates {
            per_node_cost: 75.0,
            migration_factor: 1.0,
            risk: RiskLevel::Medium,
        },
        Platform::Kubernetes => PlatformRates {
            per_node_cost: 30.0,
            migration_factor: 1.8,
            risk: RiskLevel::High,
        },
        Platform::Terraform => PlatformRates {
            per_node_cost: 20.0,
            migration_factor: 1.2,
            risk: RiskLevel::Medium,
        },
        Platform::Puppet => PlatformRates {
            per_node_cost: 125.0,
            migration_factor: 0.7,
            risk: RiskLevel::Low,
        },
    }
}
