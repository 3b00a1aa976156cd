//! Pay period window calculation.
//!
//! This module derives the [`SalaryPeriod`] for a selected month from the
//! configured payday. All arithmetic works on calendar components, never on
//! instants, so results do not depend on the host timezone.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryPeriod;

/// The earliest allowed payday.
pub const MIN_PAYDAY: u32 = 1;

/// The latest allowed payday. Every month has at least 28 days.
pub const MAX_PAYDAY: u32 = 28;

/// Checks that a payday lies in `MIN_PAYDAY..=MAX_PAYDAY`.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::validate_payday;
///
/// assert!(validate_payday(28).is_ok());
/// assert!(validate_payday(29).is_err());
/// ```
pub fn validate_payday(payday: u32) -> EngineResult<u32> {
    if (MIN_PAYDAY..=MAX_PAYDAY).contains(&payday) {
        Ok(payday)
    } else {
        Err(EngineError::InvalidPayday { payday })
    }
}

/// Checks that a zero-based month index lies in `0..=11`.
pub fn validate_month(month: u32) -> EngineResult<u32> {
    if month <= 11 {
        Ok(month)
    } else {
        Err(EngineError::InvalidMonth { month })
    }
}

/// Returns the last day number of a month.
///
/// # Arguments
///
/// * `year` - Gregorian year
/// * `month` - Zero-based month index (0 = January)
///
/// # Example
///
/// ```
/// use salary_engine::calculation::last_day_of_month;
///
/// assert_eq!(last_day_of_month(2024, 1).unwrap(), 29);
/// assert_eq!(last_day_of_month(2025, 1).unwrap(), 28);
/// assert_eq!(last_day_of_month(2026, 3).unwrap(), 30);
/// ```
pub fn last_day_of_month(year: i32, month: u32) -> EngineResult<u32> {
    let day = match validate_month(month)? {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    };
    Ok(day)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn calendar_date(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month + 1, day).ok_or(EngineError::InvalidYear { year })
}

/// Returns the `(year, month)` before the given one, wrapping January to
/// December of the previous year.
pub(crate) fn previous_month(year: i32, month: u32) -> EngineResult<(i32, u32)> {
    if month == 0 {
        let previous_year = year
            .checked_sub(1)
            .ok_or(EngineError::InvalidYear { year })?;
        Ok((previous_year, 11))
    } else {
        Ok((year, month - 1))
    }
}

/// Computes the salary period for a selected month.
///
/// With `payday == 1` the period is the calendar month itself. Otherwise it
/// runs from `payday` of the previous month through `payday - 1` of the
/// selected month, wrapping January back to December of the previous year.
///
/// # Arguments
///
/// * `selected_year` - Gregorian year of the selection
/// * `selected_month` - Zero-based month index (0 = January)
/// * `payday` - Day of month a new period begins, `1..=28`
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] or [`EngineError::InvalidPayday`]
/// for out-of-range inputs, and [`EngineError::InvalidYear`] when the year
/// cannot be represented as a calendar date. Inputs are never clamped.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_salary_period;
/// use chrono::NaiveDate;
///
/// let period = compute_salary_period(2026, 0, 20).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
/// assert_eq!(period.days().len(), 31);
/// ```
pub fn compute_salary_period(
    selected_year: i32,
    selected_month: u32,
    payday: u32,
) -> EngineResult<SalaryPeriod> {
    validate_month(selected_month)?;
    validate_payday(payday)?;

    if payday == MIN_PAYDAY {
        let last_day = last_day_of_month(selected_year, selected_month)?;
        return Ok(SalaryPeriod {
            start_date: calendar_date(selected_year, selected_month, 1)?,
            end_date: calendar_date(selected_year, selected_month, last_day)?,
        });
    }

    let (previous_year, previous_month) = previous_month(selected_year, selected_month)?;

    Ok(SalaryPeriod {
        start_date: calendar_date(previous_year, previous_month, payday)?,
        end_date: calendar_date(selected_year, selected_month, payday - 1)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_payday_one_is_calendar_month() {
        let period = compute_salary_period(2026, 3, 1).unwrap();
        assert_eq!(period.start_date, make_date("2026-04-01"));
        assert_eq!(period.end_date, make_date("2026-04-30"));
    }

    #[test]
    fn test_payday_one_leap_february() {
        let period = compute_salary_period(2024, 1, 1).unwrap();
        assert_eq!(period.end_date, make_date("2024-02-29"));
        assert_eq!(period.day_count(), 29);
    }

    #[test]
    fn test_payday_one_december() {
        let period = compute_salary_period(2025, 11, 1).unwrap();
        assert_eq!(period.start_date, make_date("2025-12-01"));
        assert_eq!(period.end_date, make_date("2025-12-31"));
    }

    #[test]
    fn test_general_payday_mid_year() {
        let period = compute_salary_period(2026, 5, 15).unwrap();
        assert_eq!(period.start_date, make_date("2026-05-15"));
        assert_eq!(period.end_date, make_date("2026-06-14"));
    }

    #[test]
    fn test_january_wraps_to_previous_december() {
        let period = compute_salary_period(2026, 0, 20).unwrap();
        assert_eq!(period.start_date, make_date("2025-12-20"));
        assert_eq!(period.end_date, make_date("2026-01-19"));
    }

    #[test]
    fn test_payday_two_ends_on_the_first() {
        let period = compute_salary_period(2026, 2, 2).unwrap();
        assert_eq!(period.start_date, make_date("2026-02-02"));
        assert_eq!(period.end_date, make_date("2026-03-01"));
        assert_eq!(period.day_count(), 28);
    }

    #[test]
    fn test_payday_28_across_leap_february() {
        let period = compute_salary_period(2024, 2, 28).unwrap();
        assert_eq!(period.start_date, make_date("2024-02-28"));
        assert_eq!(period.end_date, make_date("2024-03-27"));
        assert_eq!(period.day_count(), 29);
    }

    #[test]
    fn test_example_payday_20_january_2026() {
        let period = compute_salary_period(2026, 0, 20).unwrap();
        let days: Vec<_> = period.days().collect();

        assert_eq!(days.len(), 31);
        assert_eq!(days[12].date, make_date("2026-01-01"));
        assert!(days[12].is_new_month);
        let flagged = days.iter().filter(|d| d.is_new_month).count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn test_day_count_matches_date_difference() {
        for year in [2023, 2024, 2100, 2000] {
            for month in 0..12 {
                for payday in [1, 2, 15, 28] {
                    let period = compute_salary_period(year, month, payday).unwrap();
                    let expected = (period.end_date - period.start_date).num_days() + 1;
                    assert_eq!(period.days().count() as i64, expected);
                    assert!(period.start_date <= period.end_date);
                }
            }
        }
    }

    #[test]
    fn test_calling_twice_is_identical() {
        let first = compute_salary_period(2026, 6, 10).unwrap();
        let second = compute_salary_period(2026, 6, 10).unwrap();
        assert_eq!(first, second);
        assert!(first.days().eq(second.days()));
    }

    #[test]
    fn test_month_out_of_range_fails() {
        match compute_salary_period(2026, 12, 1) {
            Err(EngineError::InvalidMonth { month }) => assert_eq!(month, 12),
            other => panic!("Expected InvalidMonth error, got {:?}", other),
        }
    }

    #[test]
    fn test_payday_zero_fails() {
        match compute_salary_period(2026, 0, 0) {
            Err(EngineError::InvalidPayday { payday }) => assert_eq!(payday, 0),
            other => panic!("Expected InvalidPayday error, got {:?}", other),
        }
    }

    #[test]
    fn test_payday_29_fails() {
        assert!(matches!(
            compute_salary_period(2026, 0, 29),
            Err(EngineError::InvalidPayday { payday: 29 })
        ));
    }

    #[test]
    fn test_unrepresentable_year_fails() {
        assert!(matches!(
            compute_salary_period(i32::MAX, 5, 1),
            Err(EngineError::InvalidYear { .. })
        ));
    }

    #[test]
    fn test_last_day_of_month_century_rules() {
        assert_eq!(last_day_of_month(1900, 1).unwrap(), 28);
        assert_eq!(last_day_of_month(2000, 1).unwrap(), 29);
        assert!(last_day_of_month(2026, 12).is_err());
    }

    #[test]
    fn test_last_day_agrees_with_chrono() {
        for month in 0..12u32 {
            let last = last_day_of_month(2024, month).unwrap();
            let date = NaiveDate::from_ymd_opt(2024, month + 1, last).unwrap();
            assert_eq!(date.succ_opt().unwrap().day(), 1);
        }
    }

    #[test]
    fn test_previous_month_wraps_year() {
        assert_eq!(previous_month(2026, 0).unwrap(), (2025, 11));
        assert_eq!(previous_month(2026, 7).unwrap(), (2026, 6));
        assert!(previous_month(i32::MIN, 0).is_err());
    }
}
