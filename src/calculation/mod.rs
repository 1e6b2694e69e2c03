//! Calculation logic for the employee business-rule engine.
//!
//! This module contains the pure calculations attached to an employee record:
//! seniority, paid leave, RTT days, annual bonus, salary increases, starting
//! salary, and commercial performance banding.

mod bonus;
mod calculator;
mod performance;
mod rtt;
mod salary;
mod seniority;

pub use bonus::{AnnualBonusResult, BonusTier, calculate_annual_bonus};
pub use calculator::EmployeeCalculator;
pub use performance::{
    PerformanceAdjustment, PerformanceBand, calculate_commercial_performance, classify_revenue,
};
pub use rtt::{
    BASE_WEEKEND_DAYS, RttResult, calculate_rtt, counted_days_in_year, is_leap_year, rtt_days,
    weekend_days,
};
pub use salary::{increase_salary, starting_salary, validate_part_time};
pub use seniority::{paid_leave_days, seniority_years};
