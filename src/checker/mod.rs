//! Rule engine for monthly timesheets.
//!
//! A [`Checker`] evaluates a [`Timesheet`](crate::models::Timesheet) against
//! the minimum-wage and working-time rules and collects every violation as a
//! [`CheckerError`]. Rule violations are data, not failures: only an
//! unavailable holiday source makes a check fail.
//!
//! Rules are evaluated in a fixed order. Single-condition rules (total time,
//! row count, department name) yield at most one error. Per-date and per-entry
//! rules stop at their first offender unless
//! [`CheckerConfig::collect_all_offenders`](crate::config::CheckerConfig::collect_all_offenders)
//! is set. The daily maximum is the exception and reports every offending date.

mod engine;
mod report;
mod rules;
mod violation;

pub use engine::{Checker, CheckerState, CheckerVerdict};
pub use report::{AuditStep, AuditTrace, ValidationReport};
pub use rules::Aggregation;
pub use violation::{CheckerError, RuleId, Violation, render_message};
