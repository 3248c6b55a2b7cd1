//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading checker policies
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CheckerConfig;

/// Loads and provides access to a checker policy.
///
/// The policy is a single YAML file; every key is optional and falls back to
/// the [`CheckerConfig`] default:
///
/// ```text
/// workday_lower_bound: "06:00"
/// workday_upper_bound: "22:00"
/// max_day_working_time: "10:00"
/// max_row_count: 22
/// jurisdiction: BW
/// pause_rules:
///   - { threshold: "06:00", required_pause: "00:30" }
///   - { threshold: "09:00", required_pause: "00:45" }
/// ```
///
/// # Example
///
/// ```
/// use timesheet_checker::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("max_row_count: 30\njurisdiction: BY\n").unwrap();
/// assert_eq!(loader.config().max_row_count, 30);
/// assert_eq!(loader.config().jurisdiction, "BY");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CheckerConfig,
}

impl ConfigLoader {
    /// Loads a policy from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or values of the wrong shape
    /// - The policy is inconsistent (see [`CheckerConfig::normalize`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_checker::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/milog.yaml")?;
    /// # Ok::<(), timesheet_checker::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a policy from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty document means "all defaults"
        let config: CheckerConfig = if content.trim().is_empty() {
            CheckerConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?
        };

        Ok(Self {
            config: config.normalize()?,
        })
    }

    /// Returns the loaded policy.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Consumes the loader and returns the policy.
    pub fn into_config(self) -> CheckerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSpan;

    fn manifest_path(relative: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    #[test]
    fn test_load_shipped_policy() {
        let loader = ConfigLoader::load(manifest_path("config/milog.yaml")).unwrap();
        assert_eq!(loader.config(), &CheckerConfig::default());
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = ConfigLoader::load(manifest_path("config/does-not-exist.yaml"));
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("pause_rules: [unclosed");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_clock_time_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("workday_upper_bound: \"24:30\"");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let loader = ConfigLoader::from_yaml_str("").unwrap();
        assert_eq!(loader.into_config(), CheckerConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = r#"
pause_rules:
  - threshold: "09:00"
    required_pause: "00:45"
  - threshold: "06:00"
    required_pause: "00:30"
  - threshold: "12:00"
    required_pause: "01:00"
"#;
        let config = ConfigLoader::from_yaml_str(yaml).unwrap().into_config();
        let thresholds: Vec<TimeSpan> = config.pause_rules.iter().map(|r| r.threshold).collect();
        assert_eq!(
            thresholds,
            vec![
                TimeSpan::from_minutes(360),
                TimeSpan::from_minutes(540),
                TimeSpan::from_minutes(720)
            ]
        );
        assert_eq!(config.max_row_count, 22);
    }

    #[test]
    fn test_inconsistent_policy_is_rejected() {
        let result = ConfigLoader::from_yaml_str("max_row_count: 0");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
