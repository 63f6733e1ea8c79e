//! Estate health assessment: cookbook density, FTE efficiency, and the
//! technical-debt multiplier derived from them.

use crate::config::HealthThresholds;
use crate::core::benchmarks;
use crate::core::types::{EstateSnapshot, HealthMetrics, HealthScore};

/// Compute health metrics for a snapshot using the standard thresholds
/// (ratio 25/100, 150-300 cookbooks/FTE).
///
/// Pure and total: every division is guarded with a zero fallback, and the
/// categorical score only ever escalates within a call (critical is never
/// downgraded by a later check). No file or environment is consulted; tuned
/// thresholds must be passed to [`compute_health_with`] by the caller.
pub fn compute_health(snapshot: &EstateSnapshot) -> HealthMetrics {
    compute_health_with(snapshot, &HealthThresholds::default())
}

/// Compute health metrics against explicit thresholds.
pub fn compute_health_with(
    snapshot: &EstateSnapshot,
    thresholds: &HealthThresholds,
) -> HealthMetrics {
    let cookbook_ratio = if snapshot.infrastructure.total_managed_nodes > 0.0 {
        (snapshot.cookbooks.active_cookbooks / snapshot.infrastructure.total_managed_nodes) * 1000.0
    } else {
        0.0
    };

    let total_fte = snapshot.total_fte();
    let cookbooks_per_fte = if total_fte > 0.0 {
        snapshot.cookbooks.active_cookbooks / total_fte
    } else {
        0.0
    };

    let debt_multiplier = benchmarks::debt_multiplier(cookbook_ratio);

    let mut health_score = HealthScore::Healthy;
    let mut issues = Vec::new();

    if cookbook_ratio > thresholds.ratio_critical {
        health_score = HealthScore::Critical;
        issues.push(format!(
            "Cookbook ratio ({cookbook_ratio:.1}/1K nodes) is critical. Target: <{}",
            thresholds.ratio_healthy
        ));
    } else if cookbook_ratio > thresholds.ratio_healthy {
        health_score = HealthScore::Warning;
        issues.push(format!(
            "Cookbook ratio ({cookbook_ratio:.1}/1K nodes) exceeds healthy threshold. Target: <{}",
            thresholds.ratio_healthy
        ));
    }

    if cookbooks_per_fte > thresholds.per_fte_high {
        // Understaffing hint only; does not change the score.
        issues.push(format!(
            "FTE efficiency ({cookbooks_per_fte:.0} cookbooks/FTE) may indicate understaffing"
        ));
    } else if cookbooks_per_fte < thresholds.per_fte_low {
        if health_score == HealthScore::Healthy {
            health_score = HealthScore::Warning;
        }
        issues.push(format!(
            "Low FTE efficiency ({cookbooks_per_fte:.0} cookbooks/FTE) suggests complexity"
        ));
    }

    HealthMetrics {
        cookbook_ratio,
        cookbooks_per_fte,
        debt_multiplier,
        health_score,
        issues,
    }
}
