//! Configuration loading and management for the timesheet checker.
//!
//! The policy values the rules compare against (workday window, pause tiers,
//! daily maximum, row limit, holiday jurisdiction) are configuration, not
//! constants, so other states or policies need no recompilation.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_checker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/milog.yaml").unwrap();
//! println!("Checking against holidays of {}", config.config().jurisdiction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CheckerConfig, DEFAULT_MAX_ROW_COUNT, DEFAULT_WORKDAY_LOWER_BOUND, DEFAULT_WORKDAY_UPPER_BOUND,
    PauseRule,
};
