//! Work-day record model.
//!
//! A [`WorkDayRecord`] marks one team member as having worked one calendar
//! date. Records are keyed by `(member_id, date)`; at most one may exist per
//! pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One team member having worked one calendar date.
///
/// The date is timezone-naive and serialises as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use salary_engine::models::WorkDayRecord;
/// use chrono::NaiveDate;
///
/// let record = WorkDayRecord::new("member_001", NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
///     .with_car(true);
///
/// assert!(record.with_car);
/// assert!(!record.is_double);
/// assert!(record.belongs_to("member_001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkDayRecord {
    /// Identifier of the team member who worked the day.
    pub member_id: String,
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Whether the member used a vehicle; pays a flat car bonus.
    #[serde(default)]
    pub with_car: bool,
    /// Whether the day is paid at twice the daily rate.
    #[serde(default)]
    pub is_double: bool,
}

impl WorkDayRecord {
    /// Creates a plain worked day with both flags cleared.
    pub fn new(member_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            member_id: member_id.into(),
            date,
            with_car: false,
            is_double: false,
        }
    }

    /// Sets the car flag.
    pub fn with_car(mut self, with_car: bool) -> Self {
        self.with_car = with_car;
        self
    }

    /// Sets the double-day flag.
    pub fn double(mut self, is_double: bool) -> Self {
        self.is_double = is_double;
        self
    }

    /// Returns true if this record belongs to the given member.
    pub fn belongs_to(&self, member_id: &str) -> bool {
        self.member_id == member_id
    }

    /// Applies a partial flag update in place.
    pub fn apply_flags(&mut self, flags: WorkDayFlags) {
        if let Some(with_car) = flags.with_car {
            self.with_car = with_car;
        }
        if let Some(is_double) = flags.is_double {
            self.is_double = is_double;
        }
    }
}

/// A partial update of a work day's flags.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayFlags {
    /// New value for the car flag.
    #[serde(default)]
    pub with_car: Option<bool>,
    /// New value for the double-day flag.
    #[serde(default)]
    pub is_double: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_record_has_no_flags() {
        let record = WorkDayRecord::new("member_001", make_date("2026-01-05"));
        assert!(!record.with_car);
        assert!(!record.is_double);
    }

    #[test]
    fn test_builder_sets_both_flags() {
        let record = WorkDayRecord::new("member_001", make_date("2026-01-05"))
            .with_car(true)
            .double(true);
        assert!(record.with_car);
        assert!(record.is_double);
    }

    #[test]
    fn test_belongs_to() {
        let record = WorkDayRecord::new("member_001", make_date("2026-01-05"));
        assert!(record.belongs_to("member_001"));
        assert!(!record.belongs_to("member_002"));
    }

    #[test]
    fn test_apply_flags_only_touches_given_fields() {
        let mut record = WorkDayRecord::new("member_001", make_date("2026-01-05")).with_car(true);

        record.apply_flags(WorkDayFlags {
            with_car: None,
            is_double: Some(true),
        });
        assert!(record.with_car);
        assert!(record.is_double);

        record.apply_flags(WorkDayFlags {
            with_car: Some(false),
            is_double: None,
        });
        assert!(!record.with_car);
        assert!(record.is_double);
    }

    #[test]
    fn test_deserialize_defaults_flags() {
        let json = r#"{"member_id": "member_001", "date": "2026-01-05"}"#;
        let record: WorkDayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, make_date("2026-01-05"));
        assert!(!record.with_car);
        assert!(!record.is_double);
    }

    #[test]
    fn test_serialize_uses_plain_date() {
        let record = WorkDayRecord::new("member_001", make_date("2026-01-05")).double(true);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2026-01-05\""));
        assert!(json.contains("\"is_double\":true"));
    }

    #[test]
    fn test_deserialize_rejects_malformed_date() {
        let json = r#"{"member_id": "member_001", "date": "05/01/2026"}"#;
        let result: Result<WorkDayRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
