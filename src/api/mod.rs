//! HTTP API module for the Salary Engine.
//!
//! This module exposes the salary views, payroll settings, team roster and
//! work-day registry as a JSON REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MemberRequest, PaydayRequest, PeriodQuery, WorkDayRequest, WorkDaysQuery};
pub use response::{ApiError, ApiErrorResponse, PaydayResponse, PeriodResponse, SalaryResponse};
pub use state::AppState;
