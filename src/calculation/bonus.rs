//! Annual bonus calculation.
//!
//! Managers receive the base bonus times the manager multiplier. Other
//! employees at base performance receive the base bonus, and those above it
//! receive the base bonus indexed on their performance score. Everyone gets a
//! seniority component, and the total is prorated by the part-time fraction.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfig;
use crate::models::{AuditStep, Employee};

use super::seniority::seniority_years;

/// Which branch of the bonus formula applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTier {
    /// Base bonus x manager multiplier.
    Manager,
    /// Base bonus, for employees at base performance.
    BasePerformance,
    /// Base bonus x (performance + performance index).
    PerformanceIndexed,
}

/// The result of an annual bonus calculation.
#[derive(Debug, Clone)]
pub struct AnnualBonusResult {
    /// The bonus in currency units, rounded to cents.
    pub amount: Decimal,
    /// The branch of the formula that applied.
    pub tier: BonusTier,
    /// The seniority part before part-time proration.
    pub seniority_component: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the annual bonus of an employee as of `today`.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{calculate_annual_bonus, BonusTier};
/// use hr_engine::config::CompanyConfig;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let employee = Employee {
///     last_name: "Doe".to_string(),
///     first_name: "John".to_string(),
///     matricule: "M12345".parse().unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2021, 10, 16),
///     salary: None,
///     performance: Some(1),
///     part_time: Decimal::ONE,
/// };
///
/// let result = calculate_annual_bonus(&employee, &CompanyConfig::default(), today);
/// assert_eq!(result.tier, BonusTier::Manager);
/// assert_eq!(result.amount, Decimal::new(2200, 0));
/// ```
pub fn calculate_annual_bonus(
    employee: &Employee,
    config: &CompanyConfig,
    today: NaiveDate,
) -> AnnualBonusResult {
    let constants = config.constants();
    let years = seniority_years(employee, today);
    let seniority_component = constants.seniority_bonus_per_year * Decimal::from(years);
    let base = constants.base_annual_bonus;

    let score = employee.performance_or(constants.base_performance);
    let (tier, core) = if employee.is_manager() {
        (BonusTier::Manager, base * constants.manager_bonus_multiplier)
    } else if score == constants.base_performance {
        (BonusTier::BasePerformance, base)
    } else {
        (
            BonusTier::PerformanceIndexed,
            base * (Decimal::from(score) + constants.performance_bonus_index),
        )
    };

    let amount = ((core + seniority_component) * employee.part_time)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let audit_step = AuditStep {
        rule_id: "annual_bonus".to_string(),
        rule_name: "Annual Bonus".to_string(),
        input: serde_json::json!({
            "matricule": employee.matricule.to_string(),
            "performance": employee.performance,
            "seniority_years": years,
            "part_time": employee.part_time.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier": tier,
            "seniority_component": seniority_component.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "({} + {}) x {} = {}",
            core.normalize(),
            seniority_component.normalize(),
            employee.part_time.normalize(),
            amount
        ),
    };

    AnnualBonusResult {
        amount,
        tier,
        seniority_component,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn create_test_employee(
        performance: Option<i32>,
        matricule: &str,
        seniority: u32,
        part_time: &str,
    ) -> Employee {
        Employee {
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            matricule: matricule.parse().unwrap(),
            hire_date: today().checked_sub_months(Months::new(12 * seniority)),
            salary: Some(dec("1521.22")),
            performance,
            part_time: dec(part_time),
        }
    }

    fn bonus(performance: i32, matricule: &str, seniority: u32, part_time: &str) -> Decimal {
        let employee = create_test_employee(Some(performance), matricule, seniority, part_time);
        calculate_annual_bonus(&employee, &CompanyConfig::default(), today()).amount
    }

    #[test]
    fn test_technician_base_performance_new_hire() {
        assert_eq!(bonus(1, "T12345", 0, "1.0"), dec("1000.00"));
    }

    #[test]
    fn test_technician_base_performance_two_years_half_time() {
        assert_eq!(bonus(1, "T12345", 2, "0.5"), dec("600.00"));
    }

    #[test]
    fn test_technician_base_performance_two_years_full_time() {
        assert_eq!(bonus(1, "T12345", 2, "1.0"), dec("1200.00"));
    }

    #[test]
    fn test_technician_indexed_performance() {
        assert_eq!(bonus(2, "T12345", 0, "1.0"), dec("2300.00"));
        assert_eq!(bonus(2, "T12345", 1, "1.0"), dec("2400.00"));
    }

    #[test]
    fn test_manager_ignores_performance() {
        assert_eq!(bonus(1, "M12345", 0, "1.0"), dec("1700.00"));
        assert_eq!(bonus(1, "M12345", 5, "1.0"), dec("2200.00"));
        assert_eq!(bonus(2, "M12345", 0, "1.0"), dec("1700.00"));
        assert_eq!(bonus(2, "M12345", 8, "1.0"), dec("2500.00"));
    }

    #[test]
    fn test_absent_performance_counts_as_base() {
        let employee = create_test_employee(None, "C00001", 0, "1.0");
        let result = calculate_annual_bonus(&employee, &CompanyConfig::default(), today());
        assert_eq!(result.tier, BonusTier::BasePerformance);
        assert_eq!(result.amount, dec("1000"));
    }

    #[test]
    fn test_amount_rounded_to_cents() {
        // (1000 x (3 + 0.3) + 100) x 0.33 = 1122
        assert_eq!(bonus(3, "C00001", 1, "0.33"), dec("1122.00"));
        // (1000 + 0) x 0.333 = 333.0
        assert_eq!(bonus(1, "T00001", 0, "0.333"), dec("333.00"));
        // (1000 + 0) x 0.12345 = 123.45
        assert_eq!(bonus(1, "T00001", 0, "0.12345"), dec("123.45"));
        // (1000 + 0) x 0.123455 = 123.455 -> 123.46
        assert_eq!(bonus(1, "T00001", 0, "0.123455"), dec("123.46"));
    }

    #[test]
    fn test_result_reports_seniority_component() {
        let employee = create_test_employee(Some(1), "T00001", 3, "0.5");
        let result = calculate_annual_bonus(&employee, &CompanyConfig::default(), today());
        assert_eq!(result.seniority_component, dec("300"));
        assert_eq!(result.amount, dec("650.00"));
    }

    #[test]
    fn test_audit_step_names_tier() {
        let employee = create_test_employee(Some(2), "T00001", 0, "1.0");
        let result = calculate_annual_bonus(&employee, &CompanyConfig::default(), today());
        assert_eq!(result.audit_step.rule_id, "annual_bonus");
        assert_eq!(result.audit_step.output["tier"], "performance_indexed");
        assert_eq!(result.audit_step.output["amount"], "2300.00");
    }
}
