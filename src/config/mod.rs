//! Configuration management.
//!
//! Configuration is optional. Without a file every hook runs with the
//! built-in taxonomy, the `/task_medium` command, and logging disabled.
//!
//! ```toml
//! [skills]
//! investigate = ["hypothesis", "root cause"]
//!
//! [task]
//! command = "/task_medium"
//! storage_dir = "claude-code-storage"
//! instance_prefix = "claude-instance"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! file = "/tmp/sessionhooks.log"
//! ```

use crate::hooks::{KeywordTaxonomy, TASK_COMMAND};
use crate::models::SkillLabel;
use crate::services::{INSTANCE_PREFIX, PathManager, STORAGE_DIR_NAME};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SESSIONHOOKS_CONFIG_PATH";

/// Main configuration for sessionhooks.
#[derive(Debug, Clone, Default)]
pub struct HooksConfig {
    /// Skill trigger phrases used by the Stop hook.
    pub taxonomy: KeywordTaxonomy,
    /// Task preparation settings used by the prompt hook.
    pub task: TaskConfig,
    /// Logging settings from the config file.
    pub logging: LoggingSettings,
    /// Entries that were skipped while loading, for reporting once logging
    /// is installed.
    pub warnings: Vec<String>,
}

/// Task preparation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    /// Command token that triggers preparation.
    pub command: String,
    /// Workspace root directory name under the session cwd.
    pub storage_dir: String,
    /// Instance directory prefix.
    pub instance_prefix: String,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            command: TASK_COMMAND.to_string(),
            storage_dir: STORAGE_DIR_NAME.to_string(),
            instance_prefix: INSTANCE_PREFIX.to_string(),
        }
    }
}

impl TaskConfig {
    /// Returns the path manager for these names.
    #[must_use]
    pub fn path_manager(&self) -> PathManager {
        PathManager::new(&self.storage_dir, &self.instance_prefix)
    }
}

/// Logging section as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `debug` or `sessionhooks=trace`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Trigger phrase overrides keyed by skill label.
    pub skills: Option<BTreeMap<String, Vec<String>>>,
    /// Task section.
    pub task: Option<ConfigFileTask>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

/// Task section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileTask {
    /// Command token.
    pub command: Option<String>,
    /// Workspace root directory name.
    pub storage_dir: Option<String>,
    /// Instance directory prefix.
    pub instance_prefix: Option<String>,
}

impl HooksConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`].
    pub fn parse(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/sessionhooks/` on macOS)
    /// 2. XDG config dir (`~/.config/sessionhooks/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if the first config file found cannot be read or parsed.
    pub fn load_default() -> crate::Result<Self> {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Ok(Self::default());
        };

        let candidates = [
            base_dirs.config_dir().join("sessionhooks").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("sessionhooks")
                .join("config.toml"),
        ];

        Self::load_first(&candidates)
    }

    /// Loads the first existing file among `candidates`, or defaults if none exists.
    fn load_first(candidates: &[PathBuf]) -> crate::Result<Self> {
        candidates
            .iter()
            .find(|path| path.exists())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_file(path))
    }

    /// Converts a `ConfigFile` to `HooksConfig`.
    ///
    /// Invalid entries are skipped and the default kept, so a bad config never
    /// stops a hook from answering. Each skipped entry is recorded in
    /// [`HooksConfig::warnings`].
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(skills) = file.skills {
            for (name, phrases) in skills {
                let Some(label) = SkillLabel::parse(&name) else {
                    config
                        .warnings
                        .push(format!("unknown skill '{name}' in config; ignoring"));
                    continue;
                };
                match config.taxonomy.clone().with_triggers(label, phrases.as_slice()) {
                    Ok(taxonomy) => config.taxonomy = taxonomy,
                    Err(err) => config
                        .warnings
                        .push(format!("{err}; keeping built-in triggers")),
                }
            }
        }

        if let Some(task) = file.task {
            if let Some(command) = non_blank(task.command) {
                config.task.command = command;
            }
            if let Some(storage_dir) = non_blank(task.storage_dir) {
                config.task.storage_dir = storage_dir;
            }
            if let Some(prefix) = non_blank(task.instance_prefix) {
                config.task.instance_prefix = prefix;
            }
        }

        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = HooksConfig::new();
        assert_eq!(config.task.command, "/task_medium");
        assert_eq!(config.task.path_manager(), PathManager::default());
        assert_eq!(&config.taxonomy, KeywordTaxonomy::builtin());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = HooksConfig::parse(
            r#"
            [skills]
            investigate = ["Root Cause"]

            [task]
            command = "/deep_dive"
            storage_dir = "runs"
            instance_prefix = "run"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.taxonomy.triggers(SkillLabel::Investigate), ["root cause"]);
        assert_eq!(
            config.taxonomy.triggers(SkillLabel::TraceFlow),
            KeywordTaxonomy::builtin().triggers(SkillLabel::TraceFlow)
        );
        assert_eq!(config.task.command, "/deep_dive");
        assert_eq!(config.task.path_manager().instance_name(1), "run-1");
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_invalid_entries_keep_defaults() {
        let config = HooksConfig::parse(
            r#"
            [skills]
            refactor = ["cleanup"]
            trace_flow = []

            [task]
            command = "   "
            "#,
        )
        .unwrap();

        assert_eq!(&config.taxonomy, KeywordTaxonomy::builtin());
        assert_eq!(config.task.command, "/task_medium");
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings.iter().any(|w| w.contains("'refactor'")));
        assert!(config.warnings.iter().any(|w| w.contains("'trace-flow'")));
    }

    #[test]
    fn test_valid_file_has_no_warnings() {
        let config = HooksConfig::parse(r#"[skills]
investigate = ["root cause"]
"#).unwrap();
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_load_first_missing_files_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let candidates = [dir.path().join("a.toml"), dir.path().join("b.toml")];

        let config = HooksConfig::load_first(&candidates).unwrap();
        assert_eq!(config.task.command, "/task_medium");
    }

    #[test]
    fn test_load_first_reports_broken_file() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("config.toml");
        fs::write(&broken, "[task\n").unwrap();
        let fallback = dir.path().join("other.toml");
        fs::write(&fallback, "[task]\ncommand = \"/go\"\n").unwrap();

        assert!(HooksConfig::load_first(&[broken, fallback]).is_err());
    }

    #[test]
    fn test_load_first_uses_first_existing() {
        let dir = TempDir::new().unwrap();
        let second = dir.path().join("second.toml");
        fs::write(&second, "[task]\ncommand = \"/go\"\n").unwrap();

        let config = HooksConfig::load_first(&[dir.path().join("first.toml"), second]).unwrap();
        assert_eq!(config.task.command, "/go");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(HooksConfig::parse("[task\ncommand = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[task]\ncommand = \"/go\"\n").unwrap();

        let config = HooksConfig::load_from_file(&path).unwrap();
        assert_eq!(config.task.command, "/go");

        assert!(HooksConfig::load_from_file(&dir.path().join("missing.toml")).is_err());
    }
}
