//! Work-day accrual.
//!
//! Folds a member's work-day records for one salary period into a
//! [`SalaryResult`].

use rust_decimal::Decimal;

use crate::models::{MemberRateProfile, SalaryPeriod, SalaryResult, WorkDayRecord};

/// Computes a member's salary for a period.
///
/// A record counts when it belongs to `member_id` and its date lies within
/// the period, both ends inclusive. Pay is accrued as:
///
/// - `effective_days = worked_days + double_days`
/// - `base_pay = effective_days * daily_rate`
/// - `bonus_pay = car_days * car_bonus`
/// - `total = base_pay + bonus_pay`
///
/// A day flagged both `with_car` and `is_double` earns both bonuses.
///
/// # Arguments
///
/// * `member_id` - The member to accrue for
/// * `period` - The salary period window
/// * `records` - Work-day records; other members and other dates are skipped
/// * `rates` - The member's rates; pass [`MemberRateProfile::default`] when none are configured
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{compute_salary_period, compute_salary_result};
/// use salary_engine::models::{MemberRateProfile, WorkDayRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = compute_salary_period(2026, 0, 1).unwrap();
/// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let records = vec![
///     WorkDayRecord::new("member_001", day(5)),
///     WorkDayRecord::new("member_001", day(6)).with_car(true),
///     WorkDayRecord::new("member_001", day(7)).with_car(true).double(true),
/// ];
/// let rates = MemberRateProfile::new(Decimal::from(1000), Decimal::from(500));
///
/// let result = compute_salary_result("member_001", &period, &records, &rates);
/// assert_eq!(result.worked_days, 3);
/// assert_eq!(result.total, Decimal::from(5000));
/// ```
pub fn compute_salary_result<'a, I>(
    member_id: &str,
    period: &SalaryPeriod,
    records: I,
    rates: &MemberRateProfile,
) -> SalaryResult
where
    I: IntoIterator<Item = &'a WorkDayRecord>,
{
    let mut worked_days: u32 = 0;
    let mut car_days: u32 = 0;
    let mut double_days: u32 = 0;

    for record in records
        .into_iter()
        .filter(|r| r.belongs_to(member_id) && period.contains_date(r.date))
    {
        worked_days += 1;
        if record.with_car {
            car_days += 1;
        }
        if record.is_double {
            double_days += 1;
        }
    }

    let effective_days = worked_days + double_days;
    let base_pay = Decimal::from(effective_days) * rates.daily_rate;
    let bonus_pay = Decimal::from(car_days) * rates.car_bonus;

    SalaryResult {
        member_id: member_id.to_string(),
        worked_days,
        car_days,
        double_days,
        effective_days,
        base_pay,
        bonus_pay,
        total: base_pay + bonus_pay,
    }
}
