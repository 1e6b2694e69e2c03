//! Public-holiday calendars.
//!
//! RTT calculations need the public holidays of a given year. The
//! [`HolidayCalendar`] trait keeps that source injectable: the French statutory
//! calendar is computed, while [`FixedHolidayCalendar`] holds explicit dates.

mod fixed;
mod french;

use chrono::NaiveDate;
use std::collections::BTreeSet;

pub use fixed::FixedHolidayCalendar;
pub use french::{FrenchPublicHolidays, easter_sunday};

/// A source of public holiday dates.
pub trait HolidayCalendar: Send + Sync {
    /// Returns the public holidays falling in `year`.
    fn public_holidays(&self, year: i32) -> BTreeSet<NaiveDate>;
}
