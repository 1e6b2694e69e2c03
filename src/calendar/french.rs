//! French statutory public holidays.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use super::HolidayCalendar;

/// The eleven French statutory public holidays.
///
/// Fixed-date holidays plus the three moveable feasts that follow Easter
/// (Easter Monday, Ascension Thursday and Whit Monday).
///
/// # Example
///
/// ```
/// use hr_engine::calendar::{FrenchPublicHolidays, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let holidays = FrenchPublicHolidays.public_holidays(2021);
/// assert_eq!(holidays.len(), 11);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2021, 4, 5).unwrap())); // Easter Monday
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchPublicHolidays;

/// (month, day) of the holidays that do not move with Easter.
const FIXED_DATES: [(u32, u32); 8] = [
    (1, 1),   // New Year's Day
    (5, 1),   // Labour Day
    (5, 8),   // Victory in Europe Day
    (7, 14),  // Bastille Day
    (8, 15),  // Assumption
    (11, 1),  // All Saints' Day
    (11, 11), // Armistice Day
    (12, 25), // Christmas Day
];

/// Days after Easter Sunday of the moveable holidays.
const EASTER_OFFSETS: [i64; 3] = [
    1,  // Easter Monday
    39, // Ascension Thursday
    50, // Whit Monday
];

impl HolidayCalendar for FrenchPublicHolidays {
    fn public_holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holidays: BTreeSet<NaiveDate> = FIXED_DATES
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect();

        if let Some(easter) = easter_sunday(year) {
            holidays.extend(EASTER_OFFSETS.iter().map(|&days| easter + Duration::days(days)));
        }

        holidays
    }
}

/// Computes the date of Easter Sunday in the Gregorian calendar.
///
/// Uses the anonymous Gregorian computus. Returns `None` only for years
/// chrono cannot represent.
///
/// # Example
///
/// ```
/// use hr_engine::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2021), NaiveDate::from_ymd_opt(2021, 4, 4));
/// assert_eq!(easter_sunday(2040), NaiveDate::from_ymd_opt(2040, 4, 1));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
