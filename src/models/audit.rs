//! Audit step model.
//!
//! Every calculation result carries an [`AuditStep`] recording the inputs it
//! read, the figure it produced and a plain-language explanation.

use serde::{Deserialize, Serialize};

/// A single step in a calculation's audit trail.
///
/// # Example
///
/// ```
/// use hr_engine::models::AuditStep;
///
/// let step = AuditStep {
///     rule_id: "paid_leave".to_string(),
///     rule_name: "Paid Leave Entitlement".to_string(),
///     input: serde_json::json!({ "seniority_years": 2 }),
///     output: serde_json::json!({ "days": 27 }),
///     reasoning: "25 base days + 2 seniority days = 27".to_string(),
/// };
/// assert_eq!(step.output["days"], 27);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
