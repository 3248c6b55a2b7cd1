//! Configuration types for timesheet checking.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, TimeSpan};

/// Earliest permitted start of work by default.
pub const DEFAULT_WORKDAY_LOWER_BOUND: ClockTime = ClockTime::from_hm(6, 0);

/// Latest permitted end of work by default.
pub const DEFAULT_WORKDAY_UPPER_BOUND: ClockTime = ClockTime::from_hm(22, 0);

/// Maximum number of rows of the timesheet document by default.
pub const DEFAULT_MAX_ROW_COUNT: usize = 22;

/// A pause requirement that applies once a day's worked time reaches a threshold.
///
/// Rules apply cumulatively: a day that reaches several thresholds must
/// satisfy each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRule {
    /// The worked time (pause included) from which the rule applies.
    pub threshold: TimeSpan,
    /// The minimum pause required once the threshold is reached.
    pub required_pause: TimeSpan,
}

/// The policy a timesheet is checked against.
///
/// The defaults encode the rules for student employees in Baden-Württemberg.
/// Any field missing from a configuration file falls back to its default.
///
/// # Example
///
/// ```
/// use timesheet_checker::config::CheckerConfig;
///
/// let config = CheckerConfig::default();
/// assert_eq!(config.workday_lower_bound.to_string(), "06:00");
/// assert_eq!(config.max_row_count, 22);
/// assert_eq!(config.jurisdiction, "BW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Earliest permitted start of work.
    pub workday_lower_bound: ClockTime,
    /// Latest permitted end of work.
    pub workday_upper_bound: ClockTime,
    /// Pause tiers, ordered by increasing threshold.
    pub pause_rules: Vec<PauseRule>,
    /// Maximum net working time per calendar date.
    pub max_day_working_time: TimeSpan,
    /// Maximum number of entries the timesheet document can hold.
    pub max_row_count: usize,
    /// State code used for holiday lookups.
    pub jurisdiction: String,
    /// Report every offending date or entry instead of stopping at the first.
    pub collect_all_offenders: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            workday_lower_bound: DEFAULT_WORKDAY_LOWER_BOUND,
            workday_upper_bound: DEFAULT_WORKDAY_UPPER_BOUND,
            pause_rules: vec![
                PauseRule {
                    threshold: TimeSpan::from_minutes(6 * 60),
                    required_pause: TimeSpan::from_minutes(30),
                },
                PauseRule {
                    threshold: TimeSpan::from_minutes(9 * 60),
                    required_pause: TimeSpan::from_minutes(45),
                },
            ],
            max_day_working_time: TimeSpan::from_minutes(10 * 60),
            max_row_count: DEFAULT_MAX_ROW_COUNT,
            jurisdiction: "BW".to_string(),
            collect_all_offenders: false,
        }
    }
}

impl CheckerConfig {
    /// Sorts the pause rules and checks the policy for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the workday window is empty,
    /// two pause rules share a threshold, or the row limit is zero.
    pub fn normalize(mut self) -> EngineResult<Self> {
        if self.workday_lower_bound >= self.workday_upper_bound {
            return Err(EngineError::InvalidConfig {
                field: "workday_lower_bound".to_string(),
                message: format!(
                    "{} must be before workday_upper_bound {}",
                    self.workday_lower_bound, self.workday_upper_bound
                ),
            });
        }

        self.pause_rules.sort_by_key(|rule| rule.threshold);
        if let Some(pair) = self
            .pause_rules
            .windows(2)
            .find(|pair| pair[0].threshold == pair[1].threshold)
        {
            return Err(EngineError::InvalidConfig {
                field: "pause_rules".to_string(),
                message: format!("duplicate threshold {}", pair[0].threshold),
            });
        }

        if self.max_row_count == 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_row_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(self)
    }
}
