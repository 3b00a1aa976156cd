//! Response types for the Salary Engine API.
//!
//! This module defines the success bodies returned by the endpoints and the
//! error response structures used for all failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::PeriodSelection;
use crate::error::EngineError;
use crate::models::{PeriodDay, SalaryPeriod, SalaryReport};

/// Body of `GET /salary/period`.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodResponse {
    /// The selected year and zero-based month.
    pub selection: PeriodSelection,
    /// The payday the period was computed with.
    pub payday: u32,
    /// The period window.
    pub period: SalaryPeriod,
    /// Number of days in the window.
    pub day_count: u32,
    /// Every day of the window, flagging month changes.
    pub days: Vec<PeriodDay>,
}

/// Body of the salary endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryResponse {
    /// The selected year and zero-based month.
    pub selection: PeriodSelection,
    /// The month before the selection, for paging.
    pub previous: PeriodSelection,
    /// The month after the selection, for paging.
    pub next: PeriodSelection,
    /// The payday the period was computed with.
    pub payday: u32,
    /// The salary report for the period.
    #[serde(flatten)]
    pub report: SalaryReport,
}

/// Body of the payday endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaydayResponse {
    /// The configured payday.
    pub payday: u32,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::InvalidPayday { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_PAYDAY", message))
            }
            EngineError::InvalidYear { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_YEAR", message))
            }
            EngineError::InvalidMember { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_MEMBER",
                    message,
                    "The member data contains invalid information",
                ))
            }
            EngineError::MemberNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("MEMBER_NOT_FOUND", message),
            },
            EngineError::WorkDayNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("WORK_DAY_NOT_FOUND", message),
            },
            EngineError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            },
        }
    }
}
