//! Team salary report assembly.
//!
//! Both the admin dashboard and the self-service salary view go through
//! [`build_salary_report`], so accrual happens in exactly one place.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, SalaryPeriod, SalaryReport, SalaryResult, SalaryTotals, TeamMember,
    WorkDayRecord,
};

use super::accrual::compute_salary_result;

/// Builds a salary report for the given members over one period.
///
/// Results keep the order of `members`. Each member is priced with its own
/// rate profile; records for members not in the slice are ignored.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{build_salary_report, compute_salary_period};
/// use salary_engine::models::{MemberRateProfile, TeamMember, WorkDayRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = compute_salary_period(2026, 0, 20).unwrap();
/// let members = vec![TeamMember::new(
///     "member_001",
///     "Dana",
///     MemberRateProfile::new(Decimal::from(1000), Decimal::from(500)),
/// )];
/// let records = vec![WorkDayRecord::new(
///     "member_001",
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
/// )];
///
/// let report = build_salary_report(&period, &members, &records);
/// assert_eq!(report.totals.total_pay, Decimal::from(1000));
/// ```
pub fn build_salary_report(
    period: &SalaryPeriod,
    members: &[TeamMember],
    records: &[WorkDayRecord],
) -> SalaryReport {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(members.len() + 1);
    let mut step_number: u32 = 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "pay_period_window".to_string(),
        rule_name: "Pay Period Window".to_string(),
        input: serde_json::json!({
            "start_date": period.start_date.to_string(),
            "end_date": period.end_date.to_string()
        }),
        output: serde_json::json!({
            "day_count": period.day_count()
        }),
        reasoning: format!(
            "Accruing work days from {} through {} ({} days)",
            period.start_date,
            period.end_date,
            period.day_count()
        ),
    });
    step_number += 1;

    let mut results: Vec<SalaryResult> = Vec::with_capacity(members.len());
    for member in members {
        let result = compute_salary_result(&member.id, period, records, &member.rates);
        steps.push(accrual_step(step_number, member, &result));
        step_number += 1;
        results.push(result);
    }

    let totals = SalaryTotals {
        member_count: results.len() as u32,
        worked_days: results.iter().map(|r| r.worked_days).sum(),
        base_pay: results.iter().map(|r| r.base_pay).sum(),
        bonus_pay: results.iter().map(|r| r.bonus_pay).sum(),
        total_pay: results.iter().map(|r| r.total).sum(),
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    SalaryReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: *period,
        results,
        totals,
        audit_trace: AuditTrace { steps, duration_us },
    }
}

fn accrual_step(step_number: u32, member: &TeamMember, result: &SalaryResult) -> AuditStep {
    let reasoning = if result.worked_days == 0 {
        format!("{} has no work days in the period", member.name)
    } else {
        format!(
            "({} days + {} double) × ${} + {} car days × ${} = ${}",
            result.worked_days,
            result.double_days,
            member.rates.daily_rate.normalize(),
            result.car_days,
            member.rates.car_bonus.normalize(),
            result.total.normalize()
        )
    };

    AuditStep {
        step_number,
        rule_id: "work_day_accrual".to_string(),
        rule_name: "Work Day Accrual".to_string(),
        input: serde_json::json!({
            "member_id": member.id,
            "daily_rate": member.rates.daily_rate.normalize().to_string(),
            "car_bonus": member.rates.car_bonus.normalize().to_string()
        }),
        output: serde_json::json!({
            "worked_days": result.worked_days,
            "car_days": result.car_days,
            "double_days": result.double_days,
            "effective_days": result.effective_days,
            "total": result.total.normalize().to_string()
        }),
        reasoning,
    }
}
