//! Commercial performance adjustment from sales results.
//!
//! The revenue handled by a commercial employee is compared against their
//! revenue target. The ratio falls into one of five bands, each moving the
//! performance score by a fixed step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfig;
use crate::models::AuditStep;

/// Where the revenue handled falls relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// Below 80% of target.
    FarBelowTarget,
    /// From 80% up to (not including) 95% of target.
    BelowTarget,
    /// From 95% to 105% of target inclusive.
    OnTarget,
    /// Above 105% up to 120% of target inclusive.
    AboveTarget,
    /// Above 120% of target.
    FarAboveTarget,
}

impl PerformanceBand {
    /// Returns the change applied to the performance score in this band.
    pub fn step(self) -> i32 {
        match self {
            PerformanceBand::FarBelowTarget => -4,
            PerformanceBand::BelowTarget => -2,
            PerformanceBand::OnTarget => 0,
            PerformanceBand::AboveTarget => 1,
            PerformanceBand::FarAboveTarget => 4,
        }
    }

    /// Returns true if the new score is floored at the company base performance.
    pub fn floored_at_base(self) -> bool {
        matches!(
            self,
            PerformanceBand::FarBelowTarget | PerformanceBand::BelowTarget | PerformanceBand::OnTarget
        )
    }
}

/// Places the revenue handled into a band relative to the target.
///
/// Thresholds are compared as multiples of the target, so a zero target is
/// well defined: zero revenue is on target and any revenue is far above it.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::{classify_revenue, PerformanceBand};
/// use rust_decimal::Decimal;
///
/// let band = classify_revenue(Decimal::from(160_000), Decimal::from(120_000));
/// assert_eq!(band, PerformanceBand::FarAboveTarget);
/// ```
pub fn classify_revenue(handled: Decimal, target: Decimal) -> PerformanceBand {
    // A threshold past Decimal::MAX lies above every representable revenue.
    let below = |percent: i64| {
        target
            .checked_mul(Decimal::new(percent, 2))
            .is_none_or(|threshold| handled < threshold)
    };
    let at_most = |percent: i64| {
        target
            .checked_mul(Decimal::new(percent, 2))
            .is_none_or(|threshold| handled <= threshold)
    };

    if below(80) {
        PerformanceBand::FarBelowTarget
    } else if below(95) {
        PerformanceBand::BelowTarget
    } else if at_most(105) {
        PerformanceBand::OnTarget
    } else if at_most(120) {
        PerformanceBand::AboveTarget
    } else {
        PerformanceBand::FarAboveTarget
    }
}

/// The outcome of a commercial performance adjustment.
#[derive(Debug, Clone)]
pub struct PerformanceAdjustment {
    /// The score before adjustment.
    pub previous: i32,
    /// The score after adjustment.
    pub updated: i32,
    /// The band the revenue fell into.
    pub band: PerformanceBand,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the new performance score from sales results.
///
/// An absent current score counts as the company base performance. The
/// inputs are assumed validated (non-negative revenues).
pub fn calculate_commercial_performance(
    current: Option<i32>,
    revenue_handled: Decimal,
    revenue_target: Decimal,
    config: &CompanyConfig,
) -> PerformanceAdjustment {
    let base = config.constants().base_performance;
    let previous = current.unwrap_or(base);
    let band = classify_revenue(revenue_handled, revenue_target);

    let stepped = previous.saturating_add(band.step());
    let updated = if band.floored_at_base() {
        stepped.max(base)
    } else {
        stepped
    };

    let audit_step = AuditStep {
        rule_id: "commercial_performance".to_string(),
        rule_name: "Commercial Performance".to_string(),
        input: serde_json::json!({
            "previous": previous,
            "revenue_handled": revenue_handled.normalize().to_string(),
            "revenue_target": revenue_target.normalize().to_string()
        }),
        output: serde_json::json!({
            "band": band,
            "updated": updated
        }),
        reasoning: format!(
            "Revenue {} against target {} is {:?}: {} {:+} -> {}",
            revenue_handled.normalize(),
            revenue_target.normalize(),
            band,
            previous,
            band.step(),
            updated
        ),
    };

    PerformanceAdjustment {
        previous,
        updated,
        band,
        audit_step,
    }
}
