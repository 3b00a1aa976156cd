//! Salary period model.
//!
//! This module contains the [`SalaryPeriod`] window produced by the period
//! calculation, along with the lazy [`PeriodDays`] iterator that enumerates
//! every calendar day of the window.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A pay period window with inclusive start and end dates.
///
/// Derived from a month selection and the payday setting; never persisted.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryPeriod;
/// use chrono::NaiveDate;
///
/// let period = SalaryPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
/// };
///
/// assert_eq!(period.day_count(), 31);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl SalaryPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the period, `end - start + 1`.
    pub fn day_count(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Returns a lazy iterator over every day of the period.
    ///
    /// Each [`PeriodDay`] carries `is_new_month`, set when its month differs
    /// from the previous day's. The first day is never flagged.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::SalaryPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = SalaryPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
    /// };
    ///
    /// let flags: Vec<bool> = period.days().map(|d| d.is_new_month).collect();
    /// assert_eq!(flags, vec![false, false, true, false]);
    /// ```
    pub fn days(&self) -> PeriodDays {
        PeriodDays {
            next: Some(self.start_date),
            end: self.end_date,
            previous_month: None,
        }
    }
}

/// One enumerated day of a [`SalaryPeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// True when this day starts a different month than the day before it.
    pub is_new_month: bool,
}

/// Iterator over the days of a [`SalaryPeriod`], created by [`SalaryPeriod::days`].
#[derive(Debug, Clone)]
pub struct PeriodDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
    previous_month: Option<u32>,
}

impl PeriodDays {
    fn remaining(&self) -> usize {
        match self.next {
            Some(next) if next <= self.end => {
                usize::try_from((self.end - next).num_days() + 1).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl Iterator for PeriodDays {
    type Item = PeriodDay;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|date| *date <= self.end)?;
        self.next = date.succ_opt();

        let is_new_month = self
            .previous_month
            .is_some_and(|month| month != date.month());
        self.previous_month = Some(date.month());

        Some(PeriodDay { date, is_new_month })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeriodDays {}

impl FusedIterator for PeriodDays {}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn period(start: &str, end: &str) -> SalaryPeriod {
        SalaryPeriod {
            start_date: make_date(start),
            end_date: make_date(end),
        }
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = period("2025-12-20", "2026-01-19");
        assert!(period.contains_date(make_date("2025-12-20")));
        assert!(period.contains_date(make_date("2026-01-19")));
    }

    #[test]
    fn test_contains_date_outside_boundaries() {
        let period = period("2025-12-20", "2026-01-19");
        assert!(!period.contains_date(make_date("2025-12-19")));
        assert!(!period.contains_date(make_date("2026-01-20")));
    }

    #[test]
    fn test_single_day_period() {
        let period = period("2026-03-01", "2026-03-01");
        let days: Vec<PeriodDay> = period.days().collect();
        assert_eq!(period.day_count(), 1);
        assert_eq!(days.len(), 1);
        assert!(!days[0].is_new_month);
    }

    #[test]
    fn test_first_day_never_new_month_even_on_the_first() {
        let period = period("2026-02-01", "2026-02-03");
        let first = period.days().next().unwrap();
        assert_eq!(first.date, make_date("2026-02-01"));
        assert!(!first.is_new_month);
    }

    #[test]
    fn test_days_are_contiguous() {
        let period = period("2024-02-20", "2024-03-19");
        let days: Vec<NaiveDate> = period.days().map(|d| d.date).collect();
        assert_eq!(days.len() as u32, period.day_count());
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
        assert_eq!(days.first(), Some(&period.start_date));
        assert_eq!(days.last(), Some(&period.end_date));
    }

    #[test]
    fn test_leap_february_is_enumerated() {
        let period = period("2024-02-28", "2024-03-01");
        let days: Vec<PeriodDay> = period.days().collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[1].date, make_date("2024-02-29"));
        assert!(days[2].is_new_month);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let period = period("2026-01-01", "2026-01-10");
        let mut days = period.days();
        assert_eq!(days.len(), 10);
        days.next();
        days.next();
        assert_eq!(days.len(), 8);
        assert_eq!(days.count(), 8);
    }

    #[test]
    fn test_iterator_is_fused() {
        let period = period("2026-01-01", "2026-01-01");
        let mut days = period.days();
        assert!(days.next().is_some());
        assert!(days.next().is_none());
        assert!(days.next().is_none());
    }

    #[test]
    fn test_serialize_salary_period() {
        let json = serde_json::to_string(&period("2025-12-20", "2026-01-19")).unwrap();
        assert!(json.contains("\"start_date\":\"2025-12-20\""));
        assert!(json.contains("\"end_date\":\"2026-01-19\""));
    }

    #[test]
    fn test_serialize_period_day() {
        let day = PeriodDay {
            date: make_date("2026-01-01"),
            is_new_month: true,
        };
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, r#"{"date":"2026-01-01","is_new_month":true}"#);
    }
}
