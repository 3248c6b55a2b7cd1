//! The rule table.
//!
//! Each rule is a [`RuleDescriptor`]: an evaluation function that lazily yields
//! candidate violations, plus the metadata the audit trace needs. How many
//! candidates become errors is decided by the rule's [`Aggregation`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::report::AuditStep;
use super::violation::{RuleId, Violation, render_message};
use crate::config::CheckerConfig;
use crate::holiday::{HolidayError, HolidayProvider};
use crate::models::{DayTotals, Timesheet};

/// How a rule turns its candidate violations into errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// A single pass/fail condition; at most one error.
    Single,
    /// A per-date or per-entry rule that stops at the first offender, unless
    /// [`CheckerConfig::collect_all_offenders`] is set.
    FirstOffender,
    /// A per-date or per-entry rule that always reports every offender.
    AllOffenders,
}

impl RuleId {
    /// Returns how this rule aggregates its offenders.
    pub fn aggregation(&self) -> Aggregation {
        descriptor(*self).aggregation
    }

    /// Returns the statute the rule derives from, if any.
    pub fn legal_ref(&self) -> Option<&'static str> {
        descriptor(*self).legal_ref
    }
}

/// Everything a rule may look at.
pub(crate) struct RuleContext<'a> {
    pub timesheet: &'a Timesheet,
    pub config: &'a CheckerConfig,
    pub holidays: &'a dyn HolidayProvider,
}

/// Candidate violations in evaluation order. Holiday lookups happen while the
/// iterator is advanced, so an `Err` item stops the whole check.
pub(crate) type Candidates<'a> = Box<dyn Iterator<Item = Result<Violation, HolidayError>> + 'a>;

pub(crate) struct RuleDescriptor {
    pub id: RuleId,
    pub legal_ref: Option<&'static str>,
    pub aggregation: Aggregation,
    pub evaluate: for<'a> fn(&'a RuleContext<'a>) -> Candidates<'a>,
    pub describe: fn(&RuleContext<'_>) -> serde_json::Value,
}

/// All rules, in evaluation order.
pub(crate) static RULES: [RuleDescriptor; 7] = [
    RuleDescriptor {
        id: RuleId::TotalTime,
        legal_ref: Some("MiLoG §17"),
        aggregation: Aggregation::Single,
        evaluate: total_time,
        describe: describe_total_time,
    },
    RuleDescriptor {
        id: RuleId::DayPause,
        legal_ref: Some("ArbZG §4"),
        aggregation: Aggregation::FirstOffender,
        evaluate: day_pause,
        describe: describe_day_pause,
    },
    RuleDescriptor {
        id: RuleId::DayTime,
        legal_ref: Some("ArbZG §3"),
        aggregation: Aggregation::AllOffenders,
        evaluate: day_time,
        describe: describe_day_time,
    },
    RuleDescriptor {
        id: RuleId::DayBounds,
        legal_ref: None,
        aggregation: Aggregation::FirstOffender,
        evaluate: day_bounds,
        describe: describe_day_bounds,
    },
    RuleDescriptor {
        id: RuleId::ValidWorkingDay,
        legal_ref: Some("ArbZG §9"),
        aggregation: Aggregation::FirstOffender,
        evaluate: valid_working_day,
        describe: describe_valid_working_day,
    },
    RuleDescriptor {
        id: RuleId::RowCount,
        legal_ref: None,
        aggregation: Aggregation::Single,
        evaluate: row_count,
        describe: describe_row_count,
    },
    RuleDescriptor {
        id: RuleId::DepartmentName,
        legal_ref: None,
        aggregation: Aggregation::Single,
        evaluate: department_name,
        describe: describe_department_name,
    },
];

fn descriptor(id: RuleId) -> &'static RuleDescriptor {
    // RULES is ordered like RuleId
    &RULES[id as usize]
}

impl Aggregation {
    /// Drains as many candidates as this aggregation allows.
    pub(crate) fn gather(
        self,
        candidates: Candidates<'_>,
        collect_all: bool,
    ) -> Result<Vec<Violation>, HolidayError> {
        match self {
            Aggregation::AllOffenders => candidates.collect(),
            Aggregation::FirstOffender if collect_all => candidates.collect(),
            Aggregation::Single | Aggregation::FirstOffender => candidates.take(1).collect(),
        }
    }
}

impl RuleDescriptor {
    pub(crate) fn audit_step(
        &self,
        step_number: u32,
        ctx: &RuleContext<'_>,
        found: &[Violation],
    ) -> AuditStep {
        let reasoning = if found.is_empty() {
            format!("{}: no violation found", self.id.name())
        } else {
            found
                .iter()
                .map(render_message)
                .collect::<Vec<_>>()
                .join(" ")
        };

        let dates: Vec<String> = found
            .iter()
            .filter_map(Violation::date)
            .map(|d| d.to_string())
            .collect();

        AuditStep {
            step_number,
            rule_id: self.id,
            rule_name: self.id.name().to_string(),
            legal_ref: self.legal_ref.map(str::to_string),
            input: (self.describe)(ctx),
            output: json!({
                "violations": found.len(),
                "aggregation": self.aggregation,
                "dates": dates,
            }),
            reasoning,
        }
    }
}

fn total_time<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    let worked = ctx.timesheet.total_working_time();
    let limit = ctx.timesheet.profession().max_working_time;
    let violation = (worked > limit).then_some(Violation::TotalTimeExceeded { worked, limit });
    Box::new(violation.into_iter().map(Ok))
}

fn describe_total_time(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "total_working_time": ctx.timesheet.total_working_time(),
        "max_working_time": ctx.timesheet.profession().max_working_time,
    })
}

fn day_pause<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    Box::new(
        ctx.timesheet
            .daily_totals()
            .into_iter()
            .filter_map(move |(date, day)| pause_violation(ctx.config, date, day))
            .map(Ok),
    )
}

/// Checks one date against the strictest pause tier it reached.
fn pause_violation(config: &CheckerConfig, date: NaiveDate, day: DayTotals) -> Option<Violation> {
    config
        .pause_rules
        .iter()
        .rev()
        .find(|rule| day.worked >= rule.threshold && day.pause < rule.required_pause)
        .map(|rule| Violation::PauseTooShort {
            date,
            worked: day.worked,
            pause: day.pause,
            required: rule.required_pause,
        })
}

fn describe_day_pause(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "days": ctx.timesheet.daily_totals().len(),
        "pause_rules": ctx.config.pause_rules,
    })
}

fn day_time<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    Box::new(
        ctx.timesheet
            .daily_totals()
            .into_iter()
            .filter_map(move |(date, day)| day_time_violation(ctx.config, date, day))
            .map(Ok),
    )
}

/// Checks one date's net working time, vacation excluded, against the daily maximum.
fn day_time_violation(config: &CheckerConfig, date: NaiveDate, day: DayTotals) -> Option<Violation> {
    (day.net_work > config.max_day_working_time).then_some(Violation::DayTimeExceeded {
        date,
        worked: day.net_work,
        limit: config.max_day_working_time,
    })
}

fn describe_day_time(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "days": ctx.timesheet.daily_totals().len(),
        "max_day_working_time": ctx.config.max_day_working_time,
    })
}

fn day_bounds<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    let lower = ctx.config.workday_lower_bound;
    let upper = ctx.config.workday_upper_bound;

    Box::new(
        ctx.timesheet
            .entries()
            .iter()
            .enumerate()
            .filter_map(move |(index, entry)| {
                if entry.start() < lower {
                    Some(Violation::StartTooEarly {
                        date: entry.date(),
                        entry: index,
                        start: entry.start(),
                        bound: lower,
                    })
                } else if entry.end() > upper {
                    Some(Violation::EndTooLate {
                        date: entry.date(),
                        entry: index,
                        end: entry.end(),
                        bound: upper,
                    })
                } else {
                    None
                }
            })
            .map(Ok),
    )
}

fn describe_day_bounds(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "entries": ctx.timesheet.entries().len(),
        "lower_bound": ctx.config.workday_lower_bound,
        "upper_bound": ctx.config.workday_upper_bound,
    })
}

fn valid_working_day<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    let jurisdiction = ctx.config.jurisdiction.as_str();

    Box::new(
        ctx.timesheet
            .entries()
            .iter()
            .enumerate()
            .filter_map(move |(index, entry)| {
                let date = entry.date();
                if date.weekday() == Weekday::Sun {
                    return Some(Ok(Violation::SundayWork { date, entry: index }));
                }
                ctx.holidays
                    .holiday_on(date, jurisdiction)
                    .map(|holiday| {
                        holiday.map(|holiday| Violation::HolidayWork {
                            date,
                            entry: index,
                            holiday: holiday.name,
                        })
                    })
                    .transpose()
            }),
    )
}

fn describe_valid_working_day(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "entries": ctx.timesheet.entries().len(),
        "jurisdiction": ctx.config.jurisdiction,
    })
}

fn row_count<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    let rows = ctx.timesheet.entries().len();
    let limit = ctx.config.max_row_count;
    let violation = (rows > limit).then_some(Violation::RowCountExceeded { rows, limit });
    Box::new(violation.into_iter().map(Ok))
}

fn describe_row_count(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({
        "rows": ctx.timesheet.entries().len(),
        "max_row_count": ctx.config.max_row_count,
    })
}

fn department_name<'a>(ctx: &'a RuleContext<'a>) -> Candidates<'a> {
    let violation =
        (!ctx.timesheet.profession().has_department_name()).then_some(Violation::DepartmentMissing);
    Box::new(violation.into_iter().map(Ok))
}

fn describe_department_name(ctx: &RuleContext<'_>) -> serde_json::Value {
    json!({ "department_name": ctx.timesheet.profession().department_name })
}
