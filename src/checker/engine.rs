//! The checker state machine.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::report::{AuditTrace, ValidationReport};
use super::rules::{RULES, RuleContext};
use super::violation::CheckerError;
use crate::config::CheckerConfig;
use crate::error::{EngineError, EngineResult};
use crate::holiday::HolidayProvider;
use crate::models::Timesheet;

/// The overall outcome of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckerVerdict {
    /// No rule was violated.
    Valid,
    /// At least one rule was violated.
    Invalid,
}

/// Lifecycle of a [`Checker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerState {
    /// Created, not yet run.
    Idle,
    /// Evaluating rules.
    Running,
    /// All rules were evaluated.
    Completed(CheckerVerdict),
    /// The holiday source failed; no verdict was reached.
    Aborted,
}

/// Validates one timesheet against the legal rules.
///
/// A checker borrows the timesheet and the holiday source and owns its policy.
/// [`check`](Checker::check) evaluates the rules in a fixed order:
///
/// 1. total working time against the profession's maximum
/// 2. pause tiers per date
/// 3. daily maximum net working time per date
/// 4. permitted daily time window per entry
/// 5. Sundays and public holidays per entry
/// 6. number of rows
/// 7. department name
///
/// Running `check` again discards the previous result, so repeated runs on the
/// same inputs give the same verdict and errors.
///
/// # Example
///
/// ```
/// use timesheet_checker::checker::{Checker, CheckerVerdict};
/// use timesheet_checker::config::CheckerConfig;
/// use timesheet_checker::holiday::HolidayService;
/// use timesheet_checker::models::{Employee, Profession, TimeSpan, Timesheet, WorkingArea};
/// use rust_decimal::Decimal;
///
/// let timesheet = Timesheet::new(
///     Employee { name: "Max Mustermann".to_string(), staff_id: 1234567 },
///     Profession {
///         department_name: "Fakultät für Informatik".to_string(),
///         working_area: WorkingArea::Ub,
///         max_working_time: TimeSpan::new(40, 0).unwrap(),
///         hourly_wage: Decimal::new(1031, 2),
///     },
///     2019,
///     11,
///     vec![],
///     TimeSpan::ZERO,
///     TimeSpan::ZERO,
/// )
/// .unwrap();
///
/// let holidays = HolidayService::new();
/// let mut checker = Checker::new(&timesheet, &holidays, CheckerConfig::default());
/// assert_eq!(checker.check().unwrap(), CheckerVerdict::Valid);
/// assert!(checker.errors().is_empty());
/// ```
pub struct Checker<'a> {
    timesheet: &'a Timesheet,
    holidays: &'a dyn HolidayProvider,
    config: CheckerConfig,
    state: CheckerState,
    errors: Vec<CheckerError>,
    audit_trace: AuditTrace,
}

impl<'a> Checker<'a> {
    /// Creates an idle checker.
    pub fn new(
        timesheet: &'a Timesheet,
        holidays: &'a dyn HolidayProvider,
        config: CheckerConfig,
    ) -> Self {
        Self {
            timesheet,
            holidays,
            config,
            state: CheckerState::Idle,
            errors: Vec::new(),
            audit_trace: AuditTrace::default(),
        }
    }

    /// Evaluates all rules and returns the verdict.
    ///
    /// Violations are not failures: they are collected and available through
    /// [`errors`](Checker::errors) afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HolidaySource`] if a holiday lookup fails. The
    /// checker is then [`CheckerState::Aborted`] and holds no errors.
    pub fn check(&mut self) -> EngineResult<CheckerVerdict> {
        let start_time = Instant::now();
        self.state = CheckerState::Running;
        self.errors.clear();
        self.audit_trace = AuditTrace::default();

        info!(
            staff_id = self.timesheet.employee().staff_id,
            year = self.timesheet.year(),
            month = self.timesheet.month(),
            entries = self.timesheet.entries().len(),
            "Checking timesheet"
        );

        let ctx = RuleContext {
            timesheet: self.timesheet,
            config: &self.config,
            holidays: self.holidays,
        };

        let mut errors = Vec::new();
        let mut steps = Vec::with_capacity(RULES.len());

        for (position, rule) in RULES.iter().enumerate() {
            debug!(rule = %rule.id, "Evaluating rule");

            let found = match rule
                .aggregation
                .gather((rule.evaluate)(&ctx), self.config.collect_all_offenders)
            {
                Ok(found) => found,
                Err(cause) => {
                    error!(rule = %rule.id, error = %cause, "Holiday lookup failed, check aborted");
                    self.state = CheckerState::Aborted;
                    return Err(EngineError::HolidaySource(cause));
                }
            };

            steps.push(rule.audit_step(position as u32 + 1, &ctx, &found));

            for violation in found {
                let checker_error = CheckerError::new(violation);
                warn!(
                    rule = %checker_error.rule,
                    message = %checker_error.message,
                    "Rule violated"
                );
                errors.push(checker_error);
            }
        }

        let verdict = if errors.is_empty() {
            CheckerVerdict::Valid
        } else {
            CheckerVerdict::Invalid
        };
        let duration_us = start_time.elapsed().as_micros() as u64;

        info!(
            staff_id = self.timesheet.employee().staff_id,
            verdict = ?verdict,
            errors = errors.len(),
            duration_us,
            "Timesheet check completed"
        );

        self.errors = errors;
        self.audit_trace = AuditTrace { steps, duration_us };
        self.state = CheckerState::Completed(verdict);
        Ok(verdict)
    }

    /// Returns the violations found by the last completed check.
    pub fn errors(&self) -> &[CheckerError] {
        &self.errors
    }

    /// Returns the current state.
    pub fn state(&self) -> CheckerState {
        self.state
    }

    /// Returns the verdict of the last completed check, if any.
    pub fn verdict(&self) -> Option<CheckerVerdict> {
        match self.state {
            CheckerState::Completed(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Returns the audit trace of the last completed check.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }

    /// Returns the policy the checker runs with.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Builds a report of the last completed check.
    ///
    /// Returns `None` unless the checker is [`CheckerState::Completed`].
    pub fn report(&self) -> Option<ValidationReport> {
        let verdict = self.verdict()?;
        let total_working_time = self.timesheet.total_working_time();

        Some(ValidationReport {
            report_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            staff_id: self.timesheet.employee().staff_id,
            employee_name: self.timesheet.employee().name.clone(),
            year: self.timesheet.year(),
            month: self.timesheet.month(),
            verdict,
            errors: self.errors.clone(),
            total_working_time,
            total_hours: total_working_time.as_hours(),
            audit_trace: self.audit_trace.clone(),
        })
    }
}
