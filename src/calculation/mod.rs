//! Calculation logic for the Salary Engine.
//!
//! This module contains the pay period window calculation, the month
//! selection used by salary views, work-day accrual into per-member
//! salaries, and assembly of the team salary report.

mod accrual;
mod pay_period;
mod report;
mod selection;

pub use accrual::compute_salary_result;
pub use pay_period::{
    MAX_PAYDAY, MIN_PAYDAY, compute_salary_period, last_day_of_month, validate_month,
    validate_payday,
};
pub use report::build_salary_report;
pub use selection::PeriodSelection;
