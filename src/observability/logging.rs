//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "SESSIONHOOKS_LOG";

/// Directive used by `--verbose`.
const VERBOSE_FILTER: &str = "sessionhooks=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything but `json` is `Pretty`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Resolved logging configuration.
///
/// Logging is disabled unless a filter directive is present. Stdout carries
/// the hook protocol and stderr carries user-facing warnings, so a hook
/// stays quiet by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. `None` disables logging.
    pub directive: Option<String>,
    /// Output format.
    pub format: LogFormat,
    /// Log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Resolves logging from config file settings, the `SESSIONHOOKS_LOG`
    /// environment variable, and the `--verbose` flag.
    ///
    /// Precedence for the directive: environment, then `--verbose`, then the
    /// config file.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_directive = std::env::var(LOG_FILTER_ENV).ok();
        Self::resolve(settings, verbose, env_directive)
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env_directive: Option<String>,
    ) -> Self {
        let configured = settings.and_then(|s| s.level.clone());
        let directive = env_directive
            .filter(|d| !d.trim().is_empty())
            .or_else(|| verbose.then(|| VERBOSE_FILTER.to_string()))
            .or(configured)
            .filter(|d| !d.trim().is_empty());

        Self {
            directive,
            format: settings
                .and_then(|s| s.format.as_deref())
                .map(LogFormat::parse)
                .unwrap_or_default(),
            file: settings.and_then(|s| s.file.clone()),
        }
    }

    /// Returns true if logging should be installed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.directive.is_some()
    }

    /// Builds the event filter.
    ///
    /// # Errors
    ///
    /// Returns an error if logging is disabled or the directive is invalid.
    pub fn filter(&self) -> crate::Result<EnvFilter> {
        let directive = self.directive.as_deref().ok_or_else(|| crate::Error::InvalidInput(
            "logging is disabled".to_string(),
        ))?;
        EnvFilter::try_new(directive).map_err(|e| crate::Error::InvalidInput(format!(
            "invalid log filter '{directive}': {e}"
        )))
    }
}
