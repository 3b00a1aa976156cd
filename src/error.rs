//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing pay periods,
//! accruing salaries and maintaining the team registries.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// Precondition violations (`InvalidMonth`, `InvalidPayday`, `InvalidYear`)
/// are raised instead of clamping the input, so a bad selection never
/// produces a plausible but wrong pay period.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidPayday { payday: 31 };
/// assert_eq!(error.to_string(), "Invalid payday 31: must be between 1 and 28");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The selected month index was outside `0..=11`.
    #[error("Invalid month index {month}: must be between 0 and 11")]
    InvalidMonth {
        /// The rejected zero-based month index.
        month: u32,
    },

    /// The payday was outside `1..=28`.
    #[error("Invalid payday {payday}: must be between 1 and 28")]
    InvalidPayday {
        /// The rejected payday.
        payday: u32,
    },

    /// The selected year cannot be represented as a calendar date.
    #[error("Invalid year {year}: outside the supported calendar range")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// No team member exists with the given identifier.
    #[error("Team member not found: {member_id}")]
    MemberNotFound {
        /// The identifier that was looked up.
        member_id: String,
    },

    /// No work-day record exists for the member on the given date.
    #[error("Work day not found for member '{member_id}' on {date}")]
    WorkDayNotFound {
        /// The member identifier.
        member_id: String,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// A team member record was invalid or contained inconsistent data.
    #[error("Invalid member field '{field}': {message}")]
    InvalidMember {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A registry could not be accessed.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/roster.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/roster.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_month_displays_index() {
        let error = EngineError::InvalidMonth { month: 12 };
        assert_eq!(
            error.to_string(),
            "Invalid month index 12: must be between 0 and 11"
        );
    }

    #[test]
    fn test_invalid_payday_displays_value() {
        let error = EngineError::InvalidPayday { payday: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid payday 0: must be between 1 and 28"
        );
    }

    #[test]
    fn test_invalid_year_displays_value() {
        let error = EngineError::InvalidYear { year: 400_000 };
        assert_eq!(
            error.to_string(),
            "Invalid year 400000: outside the supported calendar range"
        );
    }

    #[test]
    fn test_member_not_found_displays_id() {
        let error = EngineError::MemberNotFound {
            member_id: "member_404".to_string(),
        };
        assert_eq!(error.to_string(), "Team member not found: member_404");
    }

    #[test]
    fn test_work_day_not_found_displays_member_and_date() {
        let error = EngineError::WorkDayNotFound {
            member_id: "member_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Work day not found for member 'member_001' on 2026-01-05"
        );
    }

    #[test]
    fn test_invalid_member_displays_field_and_message() {
        let error = EngineError::InvalidMember {
            field: "id".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid member field 'id': must not be empty"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 13 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
