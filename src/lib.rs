//! Salary Period Engine for team work-day payroll
//!
//! This crate derives the pay period window for a selected month and a
//! configurable payday, and accrues per-member salaries from recorded work
//! days and each member's rate profile. The registries holding members, work
//! days and the payday are exposed over an HTTP API.
//!
//! # Example
//!
//! ```
//! use salary_engine::calculation::{compute_salary_period, compute_salary_result};
//! use salary_engine::models::{MemberRateProfile, WorkDayRecord};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! // January 2026 with payday 20 runs from 20 December to 19 January.
//! let period = compute_salary_period(2026, 0, 20).unwrap();
//! assert_eq!(period.day_count(), 31);
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let records = vec![
//!     WorkDayRecord::new("member_001", date(2025, 12, 22)).with_car(true),
//!     WorkDayRecord::new("member_001", date(2026, 1, 5)).double(true),
//! ];
//! let rates = MemberRateProfile::new(Decimal::from(1000), Decimal::from(500));
//! let result = compute_salary_result("member_001", &period, &records, &rates);
//!
//! assert_eq!(result.effective_days, 3);
//! assert_eq!(result.total, Decimal::from(3500));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
