//! Employee calculator facade.
//!
//! Binds the company configuration, the holiday calendar and the current
//! date so callers can ask for an employee's figures directly.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::HolidayCalendar;
use crate::config::CompanyConfig;
use crate::error::EngineResult;
use crate::models::Employee;

use super::bonus::{AnnualBonusResult, calculate_annual_bonus};
use super::rtt::{RttResult, calculate_rtt};
use super::salary::increase_salary;
use super::seniority::{paid_leave_days, seniority_years};

/// Calculator for the figures attached to one employee record.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::EmployeeCalculator;
/// use hr_engine::calendar::FrenchPublicHolidays;
/// use hr_engine::config::CompanyConfig;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = CompanyConfig::default();
/// let today = NaiveDate::from_ymd_opt(2040, 3, 1).unwrap();
/// let calculator = EmployeeCalculator::new(&config, &FrenchPublicHolidays, today);
///
/// let employee = Employee {
///     last_name: "Doe".to_string(),
///     first_name: "John".to_string(),
///     matricule: "T00001".parse().unwrap(),
///     hire_date: Some(today),
///     salary: None,
///     performance: None,
///     part_time: Decimal::ONE,
/// };
///
/// assert_eq!(calculator.paid_leave_days(&employee), 25);
/// assert_eq!(calculator.rtt_days_current_year(&employee), 10);
/// ```
#[derive(Clone, Copy)]
pub struct EmployeeCalculator<'a> {
    config: &'a CompanyConfig,
    holidays: &'a dyn HolidayCalendar,
    today: NaiveDate,
}

impl<'a> EmployeeCalculator<'a> {
    /// Creates a calculator for the given configuration, calendar and date.
    pub fn new(config: &'a CompanyConfig, holidays: &'a dyn HolidayCalendar, today: NaiveDate) -> Self {
        Self {
            config,
            holidays,
            today,
        }
    }

    /// Returns the date the calculator treats as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whole years of seniority. See [`seniority_years`].
    pub fn seniority_years(&self, employee: &Employee) -> u32 {
        seniority_years(employee, self.today)
    }

    /// Paid-leave days. See [`paid_leave_days`].
    pub fn paid_leave_days(&self, employee: &Employee) -> u32 {
        paid_leave_days(employee, self.config, self.today)
    }

    /// RTT days for the year containing `reference_date`. See [`calculate_rtt`].
    pub fn rtt_days(&self, employee: &Employee, reference_date: NaiveDate) -> i32 {
        self.rtt(employee, reference_date).days
    }

    /// RTT days for the current year.
    pub fn rtt_days_current_year(&self, employee: &Employee) -> i32 {
        self.rtt_days(employee, self.today)
    }

    /// Full RTT breakdown for the year containing `reference_date`.
    pub fn rtt(&self, employee: &Employee, reference_date: NaiveDate) -> RttResult {
        calculate_rtt(employee, self.config, self.holidays, reference_date, self.today)
    }

    /// Annual bonus amount. See [`calculate_annual_bonus`].
    pub fn annual_bonus(&self, employee: &Employee) -> Decimal {
        self.annual_bonus_result(employee).amount
    }

    /// Full annual bonus result.
    pub fn annual_bonus_result(&self, employee: &Employee) -> AnnualBonusResult {
        calculate_annual_bonus(employee, self.config, self.today)
    }

    /// Applies a salary increase. See [`increase_salary`].
    pub fn increase_salary(&self, employee: &mut Employee, percentage: Decimal) -> EngineResult<Decimal> {
        increase_salary(employee, percentage)
    }
}

impl std::fmt::Debug for EmployeeCalculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeCalculator")
            .field("config", self.config)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}
