//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::slice;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, patch, put},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PeriodSelection, build_salary_report};
use crate::error::EngineError;
use crate::models::{MemberRateProfile, SalaryReport, TeamMember, WorkDayFlags, WorkDayRecord};

use super::request::{MemberRequest, PaydayRequest, PeriodQuery, WorkDayRequest, WorkDaysQuery};
use super::response::{
    ApiError, ApiErrorResponse, PaydayResponse, PeriodResponse, SalaryResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", get(salary_dashboard_handler))
        .route("/salary/period", get(period_handler))
        .route("/salary/members/:member_id", get(member_salary_handler))
        .route(
            "/settings/payday",
            get(get_payday_handler).put(put_payday_handler),
        )
        .route(
            "/members",
            get(list_members_handler).post(upsert_member_handler),
        )
        .route(
            "/members/:member_id",
            get(get_member_handler).delete(delete_member_handler),
        )
        .route("/members/:member_id/rates", put(put_rates_handler))
        .route(
            "/work-days",
            get(list_work_days_handler).post(mark_work_day_handler),
        )
        .route(
            "/work-days/:member_id/:date",
            patch(patch_work_day_handler).delete(unmark_work_day_handler),
        )
        .with_state(state)
}

/// Handler for GET /salary/period.
///
/// Returns the period window and its enumerated days for the configured payday.
async fn period_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<PeriodResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period request");

    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;
    let payday = state
        .settings()
        .payday()
        .map_err(|e| failure(correlation_id, e))?;
    let selection = resolve_selection(correlation_id, query, payday)?;
    let period = selection
        .period(payday)
        .map_err(|e| failure(correlation_id, e))?;

    Ok(Json(PeriodResponse {
        selection,
        payday,
        period,
        day_count: period.day_count(),
        days: period.days().collect(),
    }))
}

/// Handler for GET /salary.
///
/// The admin dashboard: one salary result per roster member.
async fn salary_dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<SalaryResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary dashboard request");

    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;
    let fail = |e: EngineError| failure(correlation_id, e);

    let payday = state.settings().payday().map_err(fail)?;
    let selection = resolve_selection(correlation_id, query, payday)?;
    let period = selection.period(payday).map_err(fail)?;
    let members = state.roster().list_members().map_err(fail)?;
    let records = state.work_days().list_all().map_err(fail)?;

    let report = build_salary_report(&period, &members, &records);
    info!(
        correlation_id = %correlation_id,
        start_date = %period.start_date,
        end_date = %period.end_date,
        member_count = report.totals.member_count,
        total_pay = %report.totals.total_pay,
        duration_us = report.audit_trace.duration_us,
        "Salary report completed successfully"
    );

    Ok(Json(salary_response(selection, payday, report)))
}

/// Handler for GET /salary/members/:member_id.
///
/// The self-service view of a single member's salary.
async fn member_salary_handler(
    State(state): State<AppState>,
    member_id: Result<Path<String>, PathRejection>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<SalaryResponse>> {
    let correlation_id = Uuid::new_v4();
    let Path(member_id) = member_id.map_err(|r| path_rejection(correlation_id, r))?;
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        "Processing member salary request"
    );

    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;
    let fail = |e: EngineError| failure(correlation_id, e);

    let member = require_member(&state, &member_id).map_err(fail)?;
    let payday = state.settings().payday().map_err(fail)?;
    let selection = resolve_selection(correlation_id, query, payday)?;
    let period = selection.period(payday).map_err(fail)?;
    let records = state.work_days().list_for_member(&member_id).map_err(fail)?;

    let report = build_salary_report(&period, slice::from_ref(&member), &records);
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        total_pay = %report.totals.total_pay,
        "Member salary completed successfully"
    );

    Ok(Json(salary_response(selection, payday, report)))
}

/// Handler for GET /settings/payday.
async fn get_payday_handler(State(state): State<AppState>) -> ApiResult<Json<PaydayResponse>> {
    let payday = state.settings().payday()?;
    Ok(Json(PaydayResponse { payday }))
}

/// Handler for PUT /settings/payday.
async fn put_payday_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaydayRequest>, JsonRejection>,
) -> ApiResult<Json<PaydayResponse>> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;

    state
        .settings()
        .set_payday(request.payday)
        .map_err(|e| failure(correlation_id, e))?;
    info!(correlation_id = %correlation_id, payday = request.payday, "Payday updated");

    Ok(Json(PaydayResponse {
        payday: request.payday,
    }))
}

/// Handler for GET /members.
async fn list_members_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.roster().list_members()?))
}

/// Handler for POST /members.
///
/// Responds 201 when the member is new and 200 when an existing one was replaced.
async fn upsert_member_handler(
    State(state): State<AppState>,
    payload: Result<Json<MemberRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;
    let member: TeamMember = request.into();

    let created = state
        .roster()
        .upsert_member(member.clone())
        .map_err(|e| failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        member_id = %member.id,
        created,
        "Member saved"
    );

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(member)))
}

/// Handler for GET /members/:member_id.
async fn get_member_handler(
    State(state): State<AppState>,
    member_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TeamMember>> {
    let correlation_id = Uuid::new_v4();
    let Path(member_id) = member_id.map_err(|r| path_rejection(correlation_id, r))?;
    let member = require_member(&state, &member_id).map_err(|e| failure(correlation_id, e))?;
    Ok(Json(member))
}

/// Handler for DELETE /members/:member_id.
///
/// Also drops every work day recorded for the member.
async fn delete_member_handler(
    State(state): State<AppState>,
    member_id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(member_id) = member_id.map_err(|r| path_rejection(correlation_id, r))?;
    let fail = |e: EngineError| failure(correlation_id, e);

    if !state.roster().remove_member(&member_id).map_err(fail)? {
        return Err(fail(EngineError::MemberNotFound { member_id }));
    }
    let removed_days = state.work_days().remove_member(&member_id).map_err(fail)?;
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        removed_days,
        "Member removed"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PUT /members/:member_id/rates.
async fn put_rates_handler(
    State(state): State<AppState>,
    member_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<MemberRateProfile>, JsonRejection>,
) -> ApiResult<Json<TeamMember>> {
    let correlation_id = Uuid::new_v4();
    let Path(member_id) = member_id.map_err(|r| path_rejection(correlation_id, r))?;
    let Json(rates) = payload.map_err(|r| json_rejection(correlation_id, r))?;

    let member = state
        .roster()
        .set_rates(&member_id, rates)
        .map_err(|e| failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        daily_rate = %rates.daily_rate,
        car_bonus = %rates.car_bonus,
        "Member rates updated"
    );

    Ok(Json(member))
}

/// Handler for GET /work-days.
async fn list_work_days_handler(
    State(state): State<AppState>,
    query: Result<Query<WorkDaysQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<WorkDayRecord>>> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| query_rejection(correlation_id, r))?;

    let records = match query.member_id {
        Some(member_id) => state.work_days().list_for_member(&member_id),
        None => state.work_days().list_all(),
    }
    .map_err(|e| failure(correlation_id, e))?;

    Ok(Json(records))
}

/// Handler for POST /work-days.
///
/// Marks a day worked for a roster member. An existing record for the same
/// date has its flags replaced and the response is 200 instead of 201.
async fn mark_work_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkDayRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WorkDayRecord>)> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| json_rejection(correlation_id, r))?;
    let record: WorkDayRecord = request.into();
    let fail = |e: EngineError| failure(correlation_id, e);

    let created = mark_for_member(&state, record.clone()).map_err(fail)?;
    info!(
        correlation_id = %correlation_id,
        member_id = %record.member_id,
        date = %record.date,
        with_car = record.with_car,
        is_double = record.is_double,
        created,
        "Work day marked"
    );

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(record)))
}

/// Handler for PATCH /work-days/:member_id/:date.
async fn patch_work_day_handler(
    State(state): State<AppState>,
    key: Result<Path<(String, NaiveDate)>, PathRejection>,
    payload: Result<Json<WorkDayFlags>, JsonRejection>,
) -> ApiResult<Json<WorkDayRecord>> {
    let correlation_id = Uuid::new_v4();
    let Path((member_id, date)) = key.map_err(|r| path_rejection(correlation_id, r))?;
    let Json(flags) = payload.map_err(|r| json_rejection(correlation_id, r))?;

    let record = state
        .work_days()
        .set_flags(&member_id, date, flags)
        .map_err(|e| failure(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        date = %date,
        with_car = record.with_car,
        is_double = record.is_double,
        "Work day flags updated"
    );

    Ok(Json(record))
}

/// Handler for DELETE /work-days/:member_id/:date.
async fn unmark_work_day_handler(
    State(state): State<AppState>,
    key: Result<Path<(String, NaiveDate)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path((member_id, date)) = key.map_err(|r| path_rejection(correlation_id, r))?;
    let fail = |e: EngineError| failure(correlation_id, e);

    if !state.work_days().unmark(&member_id, date).map_err(fail)? {
        return Err(fail(EngineError::WorkDayNotFound { member_id, date }));
    }
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        date = %date,
        "Work day unmarked"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Picks the month a salary view shows.
///
/// Without a year and month the period containing today's local date is
/// selected.
fn resolve_selection(
    correlation_id: Uuid,
    query: PeriodQuery,
    payday: u32,
) -> ApiResult<PeriodSelection> {
    let selection = match (query.year, query.month) {
        (Some(year), Some(month)) => PeriodSelection::new(year, month),
        (None, None) => PeriodSelection::containing(Local::now().date_naive(), payday),
        _ => {
            warn!(correlation_id = %correlation_id, "Incomplete period selection");
            return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
                "year and month must be given together",
            )));
        }
    };
    selection.map_err(|e| failure(correlation_id, e))
}

fn require_member(state: &AppState, member_id: &str) -> Result<TeamMember, EngineError> {
    state
        .roster()
        .get_member(member_id)?
        .ok_or_else(|| EngineError::MemberNotFound {
            member_id: member_id.to_string(),
        })
}

/// Marks a work day only while its member is on the roster.
///
/// Member removal drops the roster entry before the member's work days, so
/// reading the roster again after the write decides whether the record can
/// stay. A member that vanished in between takes the new record with it.
fn mark_for_member(state: &AppState, record: WorkDayRecord) -> Result<bool, EngineError> {
    require_member(state, &record.member_id)?;
    let created = state.work_days().mark_worked(record.clone())?;
    if state.roster().get_member(&record.member_id)?.is_none() {
        state.work_days().unmark(&record.member_id, record.date)?;
        return Err(EngineError::MemberNotFound {
            member_id: record.member_id,
        });
    }
    Ok(created)
}

fn salary_response(
    selection: PeriodSelection,
    payday: u32,
    report: SalaryReport,
) -> SalaryResponse {
    SalaryResponse {
        selection,
        previous: selection.previous(),
        next: selection.next(),
        payday,
        report,
    }
}

fn failure(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Query rejected");
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> ApiErrorResponse {
    let body_text = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %body_text, "Path rejected");
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
}
