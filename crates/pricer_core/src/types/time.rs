//! Dates and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around `chrono::NaiveDate`
//! - `DayCountConvention`: Year fraction conventions used by term structures
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`) when the `serde`
/// feature is enabled.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.add_days(10).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month and day components.
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses an ISO 8601 date string (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the date `days` calendar days later.
    ///
    /// # Errors
    /// `DateError::OutOfRange` if the result overflows the supported range.
    pub fn add_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or(DateError::OutOfRange)
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days from `other` to `self` (negative if `self`
    /// is earlier).
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Day count convention used to turn a pair of dates into a year fraction.
///
/// # Variants
/// - `Actual365Fixed`: actual days / 365
/// - `Actual360`: actual days / 360
/// - `Thirty360`: 30/360 US bond basis
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed. Standard for equity derivatives.
    #[default]
    Actual365Fixed,

    /// Actual/360. Money market convention.
    Actual360,

    /// 30/360 US bond basis: every month has 30 days, the year 360.
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365",
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`, so callers can detect
    /// dates on the wrong side of a reference date instead of panicking.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => (end - start) as f64 / 365.0,
            DayCountConvention::Actual360 => (end - start) as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                let (from, to, sign) = if start <= end {
                    (start, end, 1.0)
                } else {
                    (end, start, -1.0)
                };

                let d1 = if from.day() == 31 { 30 } else { from.day() };
                let d2 = if to.day() == 31 && d1 == 30 {
                    30
                } else {
                    to.day()
                };

                let days = 360 * (to.year() - from.year())
                    + 30 * (to.month() as i32 - from.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days as f64 / 360.0
            }
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = DateError;

    /// Parses a convention name (case-insensitive, `/` and spaces ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACT365F" | "ACTUAL365" | "ACTUAL365FIXED" | "A365" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(DateError::UnknownDayCount(s.to_string())),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    // ========================================
    // Date Tests
    // ========================================

    #[test]
    fn test_from_ymd_invalid() {
        assert_eq!(
            Date::from_ymd(2024, 2, 30),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2025-03-07").unwrap();
        assert_eq!(date.to_string(), "2025-03-07");
        assert!(Date::parse("07/03/2025").is_err());
    }

    #[test]
    fn test_sub_is_signed() {
        assert_eq!(d(2024, 1, 11) - d(2024, 1, 1), 10);
        assert_eq!(d(2024, 1, 1) - d(2024, 1, 11), -10);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(d(2024, 12, 31).add_days(1).unwrap(), d(2025, 1, 1));
    }

    // ========================================
    // Day Count Tests
    // ========================================

    #[test]
    fn test_act365_one_year() {
        let yf = DayCountConvention::Actual365Fixed.year_fraction(d(2025, 1, 1), d(2026, 1, 1));
        assert_relative_eq!(yf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_act360() {
        let yf = DayCountConvention::Actual360.year_fraction(d(2024, 1, 1), d(2024, 7, 1));
        assert_relative_eq!(yf, 182.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_thirty360_month_end() {
        let yf = DayCountConvention::Thirty360.year_fraction(d(2024, 1, 31), d(2024, 3, 31));
        assert_relative_eq!(yf, 60.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_negative_when_reversed() {
        for dc in [
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Actual360,
            DayCountConvention::Thirty360,
        ] {
            let fwd = dc.year_fraction(d(2024, 1, 15), d(2024, 9, 15));
            let back = dc.year_fraction(d(2024, 9, 15), d(2024, 1, 15));
            assert_relative_eq!(fwd, -back, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parse_day_count() {
        assert_eq!(
            "act/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!(
            "ACT/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual360
        );
        assert!("BUS/252".parse::<DayCountConvention>().is_err());
    }
}
