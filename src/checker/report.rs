//! Validation report models.
//!
//! This module contains the [`ValidationReport`] type and the audit structures
//! that record, rule by rule, how a verdict was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::engine::CheckerVerdict;
use super::violation::{CheckerError, RuleId};
use crate::models::TimeSpan;

/// A single step in the audit trace recording one rule evaluation.
///
/// Each step captures the input, output, and reasoning for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The rule that was evaluated.
    pub rule_id: RuleId,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute the rule derives from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_ref: Option<String>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the outcome.
    pub reasoning: String,
}

/// The complete audit trace of one check.
///
/// # Example
///
/// ```
/// use timesheet_checker::checker::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert_eq!(trace.duration_us, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The rule evaluations, in order.
    pub steps: Vec<AuditStep>,
    /// The total check duration in microseconds.
    pub duration_us: u64,
}

/// The outcome of checking one timesheet, ready to be stored or returned.
///
/// Built by [`Checker::report`](super::Checker::report) once a check has
/// completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the checker that produced the report.
    pub engine_version: String,
    /// Staff ID of the employee.
    pub staff_id: u32,
    /// Name of the employee.
    pub employee_name: String,
    /// Year of the timesheet.
    pub year: i32,
    /// Month of the timesheet (1..=12).
    pub month: u32,
    /// The overall verdict.
    pub verdict: CheckerVerdict,
    /// All violations found, in rule order.
    pub errors: Vec<CheckerError>,
    /// Monthly working time.
    pub total_working_time: TimeSpan,
    /// Monthly working time in decimal hours.
    pub total_hours: Decimal,
    /// Audit trace of the rule evaluations.
    pub audit_trace: AuditTrace,
}

impl ValidationReport {
    /// Returns true if no violation was found.
    pub fn is_valid(&self) -> bool {
        self.verdict == CheckerVerdict::Valid
    }
}
