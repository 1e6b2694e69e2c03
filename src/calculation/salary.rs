//! Salary calculations: starting salary at hiring time and salary increases.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Employee, Role};

/// Applies a fractional increase to the employee's salary.
///
/// Sets the salary to `round(salary x (1 + percentage))`, rounded to whole
/// currency units, and returns the percentage applied. The return value is a
/// confirmation, not the new salary.
///
/// # Errors
///
/// Returns `InvalidArgument` without touching the employee when:
/// - The employee has no salary
/// - `percentage` is zero
/// - `percentage` is below -1 (the salary would turn negative)
/// - the new salary does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::increase_salary;
/// use hr_engine::models::Employee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut employee = Employee {
///     last_name: "Doe".to_string(),
///     first_name: "John".to_string(),
///     matricule: "T00001".parse().unwrap(),
///     hire_date: None,
///     salary: Some(Decimal::from_str("1200.50").unwrap()),
///     performance: None,
///     part_time: Decimal::ONE,
/// };
///
/// let applied = increase_salary(&mut employee, Decimal::from_str("0.1").unwrap()).unwrap();
/// assert_eq!(applied, Decimal::from_str("0.1").unwrap());
/// assert_eq!(employee.salary, Some(Decimal::from(1321)));
/// ```
pub fn increase_salary(employee: &mut Employee, percentage: Decimal) -> EngineResult<Decimal> {
    let current = employee
        .salary
        .ok_or_else(|| EngineError::invalid_argument("salary", "salary must be set before an increase"))?;

    if percentage.is_zero() {
        return Err(EngineError::invalid_argument(
            "percentage",
            "increase percentage must not be zero",
        ));
    }
    if percentage < -Decimal::ONE {
        return Err(EngineError::invalid_argument(
            "percentage",
            format!("{} would make the salary negative", percentage),
        ));
    }

    let increased = Decimal::ONE
        .checked_add(percentage)
        .and_then(|factor| current.checked_mul(factor))
        .ok_or_else(|| {
            EngineError::invalid_argument(
                "percentage",
                format!("{} overflows a salary of {}", percentage, current),
            )
        })?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    employee.salary = Some(increased);

    Ok(percentage)
}

/// Computes the starting salary of a new hire.
///
/// `base_salary x coefficient(role, education) x part_time`, rounded to cents.
///
/// # Errors
///
/// Returns `InvalidArgument` if `part_time` is outside `(0, 1]` or the salary
/// grid has no coefficient for the education level.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::starting_salary;
/// use hr_engine::config::CompanyConfig;
/// use hr_engine::models::{EducationLevel, Role};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = CompanyConfig::default();
/// let salary = starting_salary(&config, Role::Technician, EducationLevel::BtsIut, Decimal::ONE).unwrap();
/// assert_eq!(salary, Decimal::from_str("1825.46").unwrap());
/// ```
pub fn starting_salary(
    config: &CompanyConfig,
    role: Role,
    education: EducationLevel,
    part_time: Decimal,
) -> EngineResult<Decimal> {
    validate_part_time(part_time)?;

    let coefficient = config
        .salary_grid()
        .coefficient(role, education)
        .ok_or_else(|| {
            EngineError::invalid_argument(
                "education",
                format!("no salary coefficient for {:?}", education),
            )
        })?;

    Ok((config.constants().base_salary * coefficient * part_time)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Checks that a part-time fraction lies in `(0, 1]`.
pub fn validate_part_time(part_time: Decimal) -> EngineResult<()> {
    if part_time <= Decimal::ZERO || part_time > Decimal::ONE {
        return Err(EngineError::invalid_argument(
            "part_time",
            format!("must be greater than 0 and at most 1, got {}", part_time),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(salary: Option<Decimal>) -> Employee {
        Employee {
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            matricule: "T00001".parse().unwrap(),
            hire_date: None,
            salary,
            performance: Some(1),
            part_time: Decimal::ONE,
        }
    }

    #[test]
    fn test_increase_default_salary() {
        let mut employee = create_test_employee(Some(dec("1521.22")));
        let applied = increase_salary(&mut employee, dec("0.05")).unwrap();

        assert_eq!(applied, dec("0.05"));
        // 1521.22 x 1.05 = 1597.281 -> 1597
        assert_eq!(employee.salary, Some(dec("1597")));
    }

    #[test]
    fn test_increase_rounds_half_up() {
        let mut employee = create_test_employee(Some(dec("1000")));
        increase_salary(&mut employee, dec("0.0005")).unwrap();
        // 1000.5 -> 1001
        assert_eq!(employee.salary, Some(dec("1001")));
    }

    #[test]
    fn test_increase_more_than_double() {
        let mut employee = create_test_employee(Some(dec("1200.50")));
        increase_salary(&mut employee, dec("1.1")).unwrap();
        // 1200.50 x 2.1 = 2521.05 -> 2521
        assert_eq!(employee.salary, Some(dec("2521")));
    }

    #[test]
    fn test_negative_percentage_decreases_salary() {
        let mut employee = create_test_employee(Some(dec("2000")));
        increase_salary(&mut employee, dec("-0.1")).unwrap();
        assert_eq!(employee.salary, Some(dec("1800")));
    }

    #[test]
    fn test_zero_percentage_fails_without_mutation() {
        let mut employee = create_test_employee(Some(dec("1521.22")));
        let result = increase_salary(&mut employee, Decimal::ZERO);

        match result {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "percentage"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert_eq!(employee.salary, Some(dec("1521.22")));
    }

    #[test]
    fn test_missing_salary_fails() {
        let mut employee = create_test_employee(None);
        let result = increase_salary(&mut employee, dec("0.05"));

        match result {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert_eq!(employee.salary, None);
    }

    #[test]
    fn test_missing_salary_reported_before_zero_percentage() {
        let mut employee = create_test_employee(None);
        match increase_salary(&mut employee, Decimal::ZERO) {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_percentage_below_minus_one_fails() {
        let mut employee = create_test_employee(Some(dec("1521.22")));
        assert!(increase_salary(&mut employee, dec("-1.5")).is_err());
        assert_eq!(employee.salary, Some(dec("1521.22")));
    }

    #[test]
    fn test_overflowing_increase_fails_without_mutation() {
        let mut employee = create_test_employee(Some(dec("1521.22")));
        match increase_salary(&mut employee, Decimal::MAX) {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "percentage"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert_eq!(employee.salary, Some(dec("1521.22")));

        let mut employee = create_test_employee(Some(Decimal::MAX));
        assert!(increase_salary(&mut employee, dec("0.5")).is_err());
        assert_eq!(employee.salary, Some(Decimal::MAX));
    }

    #[test]
    fn test_starting_salary_technician_bts_full_time() {
        let config = CompanyConfig::default();
        let salary =
            starting_salary(&config, Role::Technician, EducationLevel::BtsIut, Decimal::ONE)
                .unwrap();
        // 1521.22 x 1.2 x 1.0
        assert_eq!(salary, dec("1825.46"));
    }

    #[test]
    fn test_starting_salary_manager_master_half_time() {
        let config = CompanyConfig::default();
        let salary =
            starting_salary(&config, Role::Manager, EducationLevel::Master, dec("0.5")).unwrap();
        // 1521.22 x 1.4 x 0.5
        assert_eq!(salary, dec("1064.85"));
    }

    #[test]
    fn test_starting_salary_rejects_out_of_range_part_time() {
        let config = CompanyConfig::default();
        for part_time in ["0", "-0.5", "1.01"] {
            let result =
                starting_salary(&config, Role::Commercial, EducationLevel::Bac, dec(part_time));
            match result {
                Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "part_time"),
                other => panic!("Expected InvalidArgument for {}, got {:?}", part_time, other),
            }
        }
    }
}
