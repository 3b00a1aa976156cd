//! Request types for the Salary Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! endpoints in [`super::create_router`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MemberRateProfile, TeamMember, WorkDayRecord};

/// Query string selecting a salary period.
///
/// `month` is a zero-based index. When both fields are absent the period
/// containing today is used; giving only one of them is rejected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The selected year.
    #[serde(default)]
    pub year: Option<i32>,
    /// The selected zero-based month.
    #[serde(default)]
    pub month: Option<u32>,
}

/// Request body for `PUT /settings/payday`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaydayRequest {
    /// The new payday, in `1..=28`.
    pub payday: u32,
}

/// Request body for `POST /members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRequest {
    /// Unique identifier for the member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title or role.
    #[serde(default)]
    pub role: String,
    /// Compensation rates; omitted rates pay nothing.
    #[serde(default)]
    pub rates: MemberRateProfile,
}

impl From<MemberRequest> for TeamMember {
    fn from(req: MemberRequest) -> Self {
        TeamMember {
            id: req.id,
            name: req.name,
            role: req.role,
            rates: req.rates,
        }
    }
}

/// Request body for `POST /work-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDayRequest {
    /// The member who worked.
    pub member_id: String,
    /// The date worked, as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Whether the member used a car.
    #[serde(default)]
    pub with_car: bool,
    /// Whether the day is paid double.
    #[serde(default)]
    pub is_double: bool,
}

impl From<WorkDayRequest> for WorkDayRecord {
    fn from(req: WorkDayRequest) -> Self {
        WorkDayRecord::new(req.member_id, req.date)
            .with_car(req.with_car)
            .double(req.is_double)
    }
}

/// Query string for `GET /work-days`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkDaysQuery {
    /// Restricts the listing to one member.
    #[serde(default)]
    pub member_id: Option<String>,
}
