//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and id strategy from the environment.
//! - Keep lookup injectable so parsing is testable without process env.
//!
//! # Invariants
//! - Blank values fall back to defaults instead of failing.
//! - Unsupported values are rejected with a typed error.

use crate::ids::{IdStrategy, UnknownIdStrategy};
use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Env var holding the log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "AGENDA_LOG_LEVEL";
/// Env var holding an absolute log directory. Unset disables file logging.
pub const ENV_LOG_DIR: &str = "AGENDA_LOG_DIR";
/// Env var holding the id strategy (`counter|uuid`).
pub const ENV_ID_STRATEGY: &str = "AGENDA_ID_STRATEGY";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidIdStrategy(UnknownIdStrategy),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::InvalidIdStrategy(err) => write!(f, "{ENV_ID_STRATEGY}: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(_) => None,
            Self::InvalidIdStrategy(err) => Some(err),
        }
    }
}

/// Resolved agenda runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    pub id_strategy: IdStrategy,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl AgendaConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    /// - `InvalidLogLevel` for an unsupported level string.
    /// - `InvalidIdStrategy` for an unsupported strategy string.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.set_log_level(&raw)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_LOG_DIR)) {
            config.log_dir = Some(PathBuf::from(raw));
        }
        if let Some(raw) = non_blank(lookup(ENV_ID_STRATEGY)) {
            config.id_strategy = raw.parse().map_err(ConfigError::InvalidIdStrategy)?;
        }

        Ok(config)
    }

    /// Overrides the log level, normalizing aliases such as `warning`.
    pub fn set_log_level(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(raw).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
