//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod member;
mod salary_period;
mod salary_result;
mod work_day;

pub use member::{MemberRateProfile, TeamMember};
pub use salary_period::{PeriodDay, PeriodDays, SalaryPeriod};
pub use salary_result::{AuditStep, AuditTrace, SalaryReport, SalaryResult, SalaryTotals};
pub use work_day::{WorkDayFlags, WorkDayRecord};
