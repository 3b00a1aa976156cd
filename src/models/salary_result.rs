//! Salary result models for the Salary Engine.
//!
//! This module contains the per-member [`SalaryResult`] and the team-wide
//! [`SalaryReport`] with its totals and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryPeriod;

/// Accrued pay for one member over one salary period.
///
/// `effective_days` counts every double day twice: once in `worked_days`
/// and once more through `double_days`.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryResult;
/// use rust_decimal::Decimal;
///
/// let result = SalaryResult {
///     member_id: "member_001".to_string(),
///     worked_days: 3,
///     car_days: 2,
///     double_days: 1,
///     effective_days: 4,
///     base_pay: Decimal::from(4000),
///     bonus_pay: Decimal::from(1000),
///     total: Decimal::from(5000),
/// };
/// assert_eq!(result.base_pay + result.bonus_pay, result.total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The member this result belongs to.
    pub member_id: String,
    /// Worked days inside the period.
    pub worked_days: u32,
    /// Worked days flagged `with_car`.
    pub car_days: u32,
    /// Worked days flagged `is_double`.
    pub double_days: u32,
    /// Multiplier basis for base pay: `worked_days + double_days`.
    pub effective_days: u32,
    /// `effective_days * daily_rate`.
    pub base_pay: Decimal,
    /// `car_days * car_bonus`.
    pub bonus_pay: Decimal,
    /// `base_pay + bonus_pay`.
    pub total: Decimal,
}

/// Aggregated totals across all members of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Number of members included.
    pub member_count: u32,
    /// Sum of worked days.
    pub worked_days: u32,
    /// Sum of base pay.
    pub base_pay: Decimal,
    /// Sum of car bonuses.
    pub bonus_pay: Decimal,
    /// Total payroll for the period.
    pub total_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Salary results for a whole team over one period.
///
/// This is what the admin salary dashboard and the self-service view both
/// render; the latter simply holds a single member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// The period the results were accrued over.
    pub period: SalaryPeriod,
    /// One result per member, in roster order.
    pub results: Vec<SalaryResult>,
    /// Aggregated totals.
    pub totals: SalaryTotals,
    /// Audit trace of the accrual decisions.
    pub audit_trace: AuditTrace,
}

impl SalaryReport {
    /// Looks up the result for a member.
    pub fn result_for(&self, member_id: &str) -> Option<&SalaryResult> {
        self.results.iter().find(|r| r.member_id == member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result(member_id: &str, total: Decimal) -> SalaryResult {
        SalaryResult {
            member_id: member_id.to_string(),
            worked_days: 1,
            car_days: 0,
            double_days: 0,
            effective_days: 1,
            base_pay: total,
            bonus_pay: Decimal::ZERO,
            total,
        }
    }

    fn create_sample_report() -> SalaryReport {
        SalaryReport {
            report_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-20T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "1.0.0".to_string(),
            period: SalaryPeriod {
                start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
            },
            results: vec![
                create_sample_result("member_001", dec("1000")),
                create_sample_result("member_002", dec("750.50")),
            ],
            totals: SalaryTotals {
                member_count: 2,
                worked_days: 2,
                base_pay: dec("1750.50"),
                bonus_pay: Decimal::ZERO,
                total_pay: dec("1750.50"),
            },
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 12,
            },
        }
    }

    #[test]
    fn test_result_for_finds_member() {
        let report = create_sample_report();
        let result = report.result_for("member_002").unwrap();
        assert_eq!(result.total, dec("750.50"));
        assert!(report.result_for("member_999").is_none());
    }

    #[test]
    fn test_salary_result_serialization() {
        let result = create_sample_result("member_001", dec("1000"));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"member_id\":\"member_001\""));
        assert!(json.contains("\"worked_days\":1"));
        assert!(json.contains("\"total\":\"1000\""));
    }

    #[test]
    fn test_salary_report_serialization() {
        let json = serde_json::to_string(&create_sample_report()).unwrap();
        assert!(json.contains("\"report_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"period\":{\"start_date\":\"2025-12-20\""));
        assert!(json.contains("\"total_pay\":\"1750.50\""));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_salary_report_deserialization() {
        let json = r#"{
            "report_id": "12345678-1234-1234-1234-123456789012",
            "timestamp": "2026-01-20T10:00:00Z",
            "engine_version": "1.0.0",
            "period": {"start_date": "2026-01-01", "end_date": "2026-01-31"},
            "results": [],
            "totals": {
                "member_count": 0,
                "worked_days": 0,
                "base_pay": "0",
                "bonus_pay": "0",
                "total_pay": "0"
            },
            "audit_trace": {"steps": [], "duration_us": 0}
        }"#;

        let report: SalaryReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.period.day_count(), 31);
        assert!(report.results.is_empty());
        assert_eq!(report.totals.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "pay_period_window".to_string(),
            rule_name: "Pay Period Window".to_string(),
            input: serde_json::json!({"payday": 20}),
            output: serde_json::json!({"start_date": "2025-12-20"}),
            reasoning: "Payday 20 runs from the 20th to the 19th".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"pay_period_window\""));
    }
}
