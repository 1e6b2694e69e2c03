//! RTT (reduced-work-time) day calculation.
//!
//! Employees on a fixed-day work agreement receive compensatory RTT days:
//! the days of the year, minus the forfeit ceiling, weekends, paid leave and
//! public holidays falling on a weekday, prorated by the part-time fraction
//! and rounded up.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calendar::HolidayCalendar;
use crate::config::CompanyConfig;
use crate::models::{AuditStep, Employee};

use super::seniority::paid_leave_days;

/// Weekend days in a year before the January 1st adjustment.
pub const BASE_WEEKEND_DAYS: u32 = 104;

/// The result of an RTT calculation, with the figures that produced it.
#[derive(Debug, Clone)]
pub struct RttResult {
    /// The calendar year the RTT days are granted for.
    pub year: i32,
    /// Days counted for the year.
    pub counted_days: u32,
    /// Forfeit-day ceiling subtracted.
    pub forfeit_day_ceiling: u32,
    /// Weekend days subtracted.
    pub weekend_days: u32,
    /// Paid-leave days subtracted.
    pub paid_leave_days: u32,
    /// Public holidays falling Monday to Friday.
    pub weekday_public_holidays: u32,
    /// RTT days for a full-time employee.
    pub raw_days: i32,
    /// RTT days after part-time proration, rounded up.
    pub days: i32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days counted for `year` in the RTT formula.
///
/// Leap years count 365 and common years 366.
pub fn counted_days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 365 } else { 366 }
}

/// Extra weekend days by the weekday of January 1st.
fn weekend_offset(jan_first: Weekday, leap: bool) -> u32 {
    match (jan_first, leap) {
        (Weekday::Thu, true) => 1,
        (Weekday::Fri, true) => 2,
        (Weekday::Fri, false) => 1,
        (Weekday::Sat, _) => 1,
        _ => 0,
    }
}

/// Returns the number of weekend days counted for `year`.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::weekend_days;
///
/// assert_eq!(weekend_days(2021), 105); // January 1st on a Friday
/// assert_eq!(weekend_days(2040), 104); // January 1st on a Sunday
/// ```
pub fn weekend_days(year: i32) -> u32 {
    NaiveDate::from_yo_opt(year, 1).map_or(BASE_WEEKEND_DAYS, |jan_first| {
        BASE_WEEKEND_DAYS + weekend_offset(jan_first.weekday(), is_leap_year(year))
    })
}

fn is_weekday(date: &NaiveDate) -> bool {
    date.weekday().number_from_monday() <= Weekday::Fri.number_from_monday()
}

/// Calculates the RTT days for the calendar year containing `reference_date`.
///
/// Paid leave includes seniority as of `today`, not as of the reference year.
///
/// # Arguments
///
/// * `employee` - The employee to calculate RTT for
/// * `config` - Company constants (forfeit ceiling, base leave)
/// * `holidays` - Source of the year's public holidays
/// * `reference_date` - Any date in the year of interest
/// * `today` - The current date, for seniority
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::calculate_rtt;
/// use hr_engine::calendar::FrenchPublicHolidays;
/// use hr_engine::config::CompanyConfig;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     last_name: "Doe".to_string(),
///     first_name: "John".to_string(),
///     matricule: "T00001".parse().unwrap(),
///     hire_date: None,
///     salary: None,
///     performance: None,
///     part_time: Decimal::ONE,
/// };
/// let day = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
///
/// let result = calculate_rtt(&employee, &CompanyConfig::default(), &FrenchPublicHolidays, day, day);
/// assert_eq!(result.days, 11);
/// ```
pub fn calculate_rtt(
    employee: &Employee,
    config: &CompanyConfig,
    holidays: &dyn HolidayCalendar,
    reference_date: NaiveDate,
    today: NaiveDate,
) -> RttResult {
    let year = reference_date.year();
    let counted_days = counted_days_in_year(year);
    let forfeit_day_ceiling = config.constants().forfeit_day_ceiling;
    let weekend_days = weekend_days(year);
    let paid_leave_days = paid_leave_days(employee, config, today);
    let weekday_public_holidays = holidays
        .public_holidays(year)
        .iter()
        .filter(|date| is_weekday(date))
        .count() as u32;

    let raw_days = counted_days as i32
        - forfeit_day_ceiling as i32
        - weekend_days as i32
        - paid_leave_days as i32
        - weekday_public_holidays as i32;

    let prorated = Decimal::from(raw_days) * employee.part_time;
    let days = prorated.ceil().to_i32().unwrap_or(raw_days);

    let audit_step = AuditStep {
        rule_id: "rtt_days".to_string(),
        rule_name: "RTT Days".to_string(),
        input: serde_json::json!({
            "matricule": employee.matricule.to_string(),
            "year": year,
            "part_time": employee.part_time.normalize().to_string()
        }),
        output: serde_json::json!({
            "counted_days": counted_days,
            "forfeit_day_ceiling": forfeit_day_ceiling,
            "weekend_days": weekend_days,
            "paid_leave_days": paid_leave_days,
            "weekday_public_holidays": weekday_public_holidays,
            "raw_days": raw_days,
            "days": days
        }),
        reasoning: format!(
            "{} - {} - {} - {} - {} = {} days, x {} rounded up = {}",
            counted_days,
            forfeit_day_ceiling,
            weekend_days,
            paid_leave_days,
            weekday_public_holidays,
            raw_days,
            employee.part_time.normalize(),
            days
        ),
    };

    RttResult {
        year,
        counted_days,
        forfeit_day_ceiling,
        weekend_days,
        paid_leave_days,
        weekday_public_holidays,
        raw_days,
        days,
        audit_step,
    }
}

/// Returns only the number of RTT days. See [`calculate_rtt`].
pub fn rtt_days(
    employee: &Employee,
    config: &CompanyConfig,
    holidays: &dyn HolidayCalendar,
    reference_date: NaiveDate,
    today: NaiveDate,
) -> i32 {
    calculate_rtt(employee, config, holidays, reference_date, today).days
}
