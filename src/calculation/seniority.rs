//! Seniority and paid-leave entitlement.
//!
//! Seniority counts whole calendar years between the hire year and the current
//! year. Months and days are ignored.

use chrono::{Datelike, NaiveDate};

use crate::config::CompanyConfig;
use crate::models::Employee;

/// Returns the employee's seniority in whole years as of `today`.
///
/// Returns 0 when the hire date is absent or not strictly before `today`.
/// Otherwise returns `today.year - hire_date.year`, so an employee hired
/// earlier in the current year also has 0 years.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::seniority_years;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     last_name: "Doe".to_string(),
///     first_name: "John".to_string(),
///     matricule: "T00001".parse().unwrap(),
///     hire_date: NaiveDate::from_ymd_opt(2018, 12, 31),
///     salary: None,
///     performance: None,
///     part_time: Decimal::ONE,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// assert_eq!(seniority_years(&employee, today), 2);
/// ```
pub fn seniority_years(employee: &Employee, today: NaiveDate) -> u32 {
    match employee.hire_date {
        Some(hired) if hired < today => (today.year() - hired.year()) as u32,
        _ => 0,
    }
}

/// Returns the paid-leave days: the company base plus one day per year of seniority.
pub fn paid_leave_days(employee: &Employee, config: &CompanyConfig, today: NaiveDate) -> u32 {
    config.constants().base_leave_days + seniority_years(employee, today)
}
