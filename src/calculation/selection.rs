//! Month selection for salary views.
//!
//! [`PeriodSelection`] is the small piece of state a view keeps to page
//! through salary periods. The period math itself stays in
//! [`compute_salary_period`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::SalaryPeriod;

use super::pay_period::{MIN_PAYDAY, compute_salary_period, validate_month, validate_payday};

/// A selected `(year, month)` with a zero-based month index.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::PeriodSelection;
///
/// let january = PeriodSelection::new(2026, 0).unwrap();
/// let december = january.previous();
/// assert_eq!((december.year(), december.month()), (2025, 11));
/// assert_eq!(december.next(), january);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PeriodSelection {
    year: i32,
    month: u32,
}

impl PeriodSelection {
    /// Creates a selection, rejecting month indices outside `0..=11`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        validate_month(month)?;
        Ok(Self { year, month })
    }

    /// Selects the pay period that contains `date`.
    ///
    /// With a payday after the 1st, dates on or after the payday belong to
    /// the following month's period.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::calculation::PeriodSelection;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
    /// let selection = PeriodSelection::containing(date, 20).unwrap();
    /// assert_eq!((selection.year(), selection.month()), (2026, 0));
    /// assert!(selection.period(20).unwrap().contains_date(date));
    /// ```
    pub fn containing(date: NaiveDate, payday: u32) -> EngineResult<Self> {
        validate_payday(payday)?;
        let current = Self {
            year: date.year(),
            month: date.month0(),
        };
        if payday == MIN_PAYDAY || date.day() < payday {
            Ok(current)
        } else {
            Ok(current.next())
        }
    }

    /// The selected year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The selected zero-based month index.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, wrapping December into January.
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year.saturating_add(1),
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, wrapping January into December.
    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year.saturating_sub(1),
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Computes the salary period for this selection.
    pub fn period(&self, payday: u32) -> EngineResult<SalaryPeriod> {
        compute_salary_period(self.year, self.month, payday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_rejects_month_12() {
        assert!(matches!(
            PeriodSelection::new(2026, 12),
            Err(EngineError::InvalidMonth { month: 12 })
        ));
    }

    #[test]
    fn test_next_wraps_december() {
        let selection = PeriodSelection::new(2025, 11).unwrap().next();
        assert_eq!(selection.year(), 2026);
        assert_eq!(selection.month(), 0);
    }

    #[test]
    fn test_previous_wraps_january() {
        let selection = PeriodSelection::new(2026, 0).unwrap().previous();
        assert_eq!(selection.year(), 2025);
        assert_eq!(selection.month(), 11);
    }

    #[test]
    fn test_paging_a_full_year_returns_to_start() {
        let start = PeriodSelection::new(2026, 4).unwrap();
        let mut selection = start;
        for _ in 0..12 {
            selection = selection.next();
        }
        assert_eq!(selection, PeriodSelection::new(2027, 4).unwrap());
        for _ in 0..12 {
            selection = selection.previous();
        }
        assert_eq!(selection, start);
    }

    #[test]
    fn test_containing_with_payday_one_is_calendar_month() {
        let selection = PeriodSelection::containing(make_date("2026-03-31"), 1).unwrap();
        assert_eq!((selection.year(), selection.month()), (2026, 2));
    }

    #[test]
    fn test_containing_before_payday_stays_in_month() {
        let selection = PeriodSelection::containing(make_date("2026-01-19"), 20).unwrap();
        assert_eq!((selection.year(), selection.month()), (2026, 0));
    }

    #[test]
    fn test_containing_on_payday_moves_to_next_month() {
        let selection = PeriodSelection::containing(make_date("2026-01-20"), 20).unwrap();
        assert_eq!((selection.year(), selection.month()), (2026, 1));
        let period = selection.period(20).unwrap();
        assert_eq!(period.start_date, make_date("2026-01-20"));
    }

    #[test]
    fn test_containing_always_contains_the_date() {
        let mut date = make_date("2024-01-01");
        while date < make_date("2025-01-01") {
            for payday in [1, 2, 10, 28] {
                let selection = PeriodSelection::containing(date, payday).unwrap();
                assert!(
                    selection.period(payday).unwrap().contains_date(date),
                    "{} not in period for payday {}",
                    date,
                    payday
                );
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_containing_rejects_invalid_payday() {
        assert!(PeriodSelection::containing(make_date("2026-01-01"), 0).is_err());
    }

    #[test]
    fn test_serialize_selection() {
        let json = serde_json::to_string(&PeriodSelection::new(2026, 0).unwrap()).unwrap();
        assert_eq!(json, r#"{"year":2026,"month":0}"#);
    }
}
