//! Binary entry point for sessionhooks.
//!
//! Claude Code invokes `sessionhooks hook <event>` with the event envelope on
//! stdin.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{HookEvent, cmd_hook};
use sessionhooks::cli::{SkillsOutputFormat, cmd_skills};
use sessionhooks::config::{CONFIG_PATH_ENV, HooksConfig};
use sessionhooks::observability::{self, LoggingConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Sessionhooks - Claude Code session hooks for memory advisories and task preparation.
#[derive(Parser)]
#[command(name = "sessionhooks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging to stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Claude Code hook handlers.
    Hook {
        /// Hook event type.
        #[command(subcommand)]
        event: HookEvent,
    },

    /// List evolving skills and their trigger phrases.
    Skills {
        /// Output format (table, json).
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (HooksConfig::default(), Some(e)),
    };

    let logging = LoggingConfig::from_settings(Some(&config.logging), cli.verbose);
    if let Err(e) = observability::init(&logging)
        && cli.verbose
    {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load configuration; using defaults");
    }
    for warning in &config.warnings {
        tracing::warn!(warning = %warning, "Skipped configuration entry");
    }

    match cli.command {
        Commands::Hook { event } => {
            cmd_hook(event, &config);
            ExitCode::SUCCESS
        },
        Commands::Skills { format } => {
            let format = format.parse::<SkillsOutputFormat>().unwrap_or_default();
            match cmd_skills(&config.taxonomy, format, cli.verbose) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                },
            }
        },
    }
}

/// Loads configuration from `--config`, the environment, or the default location.
fn load_config(path: Option<&Path>) -> sessionhooks::Result<HooksConfig> {
    if let Some(config_path) = path {
        return HooksConfig::load_from_file(config_path);
    }

    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV)
        && !config_path.trim().is_empty()
    {
        return HooksConfig::load_from_file(Path::new(&config_path));
    }

    HooksConfig::load_default()
}
