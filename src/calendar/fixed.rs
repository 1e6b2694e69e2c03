//! Explicit holiday lists.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

use super::HolidayCalendar;

/// A calendar holding an explicit set of holiday dates.
///
/// Years with no dates registered have no holidays.
///
/// # Example
///
/// ```
/// use hr_engine::calendar::{FixedHolidayCalendar, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = FixedHolidayCalendar::from_dates([
///     NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2030, 12, 25).unwrap(),
/// ]);
/// assert_eq!(calendar.public_holidays(2030).len(), 2);
/// assert!(calendar.public_holidays(2031).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidayCalendar {
    by_year: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl FixedHolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from any collection of dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        let mut calendar = Self::new();
        for date in dates {
            calendar.add(date);
        }
        calendar
    }

    /// Registers a holiday.
    pub fn add(&mut self, date: NaiveDate) {
        self.by_year.entry(date.year()).or_default().insert(date);
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn public_holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.by_year.get(&year).cloned().unwrap_or_default()
    }
}
