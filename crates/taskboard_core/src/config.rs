//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold the knobs the repository layer and logging bootstrap read at
//!   construction time.
//! - Parse those knobs from environment variables.
//!
//! # Invariants
//! - An unset variable keeps the default; an unparsable one is an error.
//! - Defaults reproduce the non-cascading project delete.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_PROJECT_DELETE: &str = "TASKBOARD_PROJECT_DELETE";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

/// Configuration parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "invalid value `{value}` for {key}; expected {expected}"),
        }
    }
}

impl Error for ConfigError {}

/// What happens to a project's tasks and tag links when the project is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDeletePolicy {
    /// Remove the project row only. Tasks and tag links are left orphaned.
    #[default]
    Retain,
    /// Also delete the project's tasks and drop its tag links.
    Cascade,
}

impl ProjectDeletePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Cascade => "cascade",
        }
    }
}

impl FromStr for ProjectDeletePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "cascade" => Ok(Self::Cascade),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_PROJECT_DELETE,
                value: value.to_string(),
                expected: "retain|cascade",
            }),
        }
    }
}

/// File logging settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub dir: PathBuf,
}

impl LogConfig {
    /// Uses the build-mode default level.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: dir.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub project_delete: ProjectDeletePolicy,
    /// `None` leaves logging uninitialized.
    #[serde(default)]
    pub log: Option<LogConfig>,
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(ENV_PROJECT_DELETE)) {
            config.project_delete = value.parse()?;
        }

        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            let mut log = LogConfig::new(dir);
            if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
                log.level = level;
            }
            config.log = Some(log);
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
