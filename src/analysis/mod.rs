//! The cost model engine: a single-pass, deterministic pipeline from an
//! estate snapshot to a full analysis report.
//!
//! Pipeline stages:
//! - **health**: cookbook density ratios and the categorical health score
//! - **costs**: the nine-line annual cost breakdown and its aggregates
//! - **scenario**: per-platform migration projections, NPV, and breakeven
//! - **report**: composition, per-unit costs, and recommendations
//!
//! Every stage is a pure function of its inputs and the static benchmark
//! tables; none can fail on numeric input.

pub mod costs;
pub mod health;
pub mod report;
pub mod scenario;

pub use costs::compute_costs;
pub use health::{compute_health, compute_health_with};
pub use report::{generate_report, generate_report_with, per_unit_costs, recommendations};
pub use scenario::{compute_migration_cost, compute_scenario, compute_scenarios};
