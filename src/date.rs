//! Calendar date conversion for diary bucketing.
//!
//! Converts ledger timestamps (seconds since the Unix epoch) into proleptic
//! Gregorian UTC dates and back. Only integer arithmetic is used so results
//! are identical on every host.

use soroban_sdk::contracttype;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// First year representable by [`to_timestamp`].
pub const EPOCH_YEAR: u32 = 1970;

/// Last supported year.
pub const MAX_YEAR: u32 = 9999;

/// 9999-12-31T23:59:59Z. Later timestamps saturate to this instant.
pub const MAX_TIMESTAMP: u64 = 253_402_300_799;

/// Days between 0000-03-01 and 1970-01-01.
const DAYS_TO_UNIX_EPOCH: u64 = 719_468;

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: u64 = 146_097;

/// A calendar day in UTC.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Build a date, returning `None` if the month or day is out of range.
    pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert seconds since the Unix epoch into the UTC calendar date.
///
/// Timestamps past [`MAX_TIMESTAMP`] map to 9999-12-31.
pub fn from_timestamp(epoch_seconds: u64) -> Date {
    let epoch_seconds = epoch_seconds.min(MAX_TIMESTAMP);
    // Shift to a calendar whose years start on March 1st so the leap day is
    // the last day of the year.
    let z = epoch_seconds / SECONDS_PER_DAY + DAYS_TO_UNIX_EPOCH;
    let era = z / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;

    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    Date {
        year: year as u32,
        month: month as u32,
        day: day as u32,
    }
}

/// Convert a date into the timestamp of its UTC midnight.
///
/// Returns `None` if the date is not a real calendar day or falls outside
/// 1970-01-01 through 9999-12-31.
pub fn to_timestamp(date: Date) -> Option<u64> {
    let date = Date::new(date.year, date.month, date.day)?;
    if date.year < EPOCH_YEAR || date.year > MAX_YEAR {
        return None;
    }

    let year = u64::from(date.year) - u64::from(date.month <= 2);
    let month = u64::from(date.month);
    let era = year / 400;
    let yoe = year - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + u64::from(date.day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    let days = era * DAYS_PER_ERA + doe - DAYS_TO_UNIX_EPOCH;
    days.checked_mul(SECONDS_PER_DAY)
}
