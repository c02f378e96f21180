//! Process-wide settings, resolved once at startup and passed down.
//!
//! Sources, highest priority first:
//! - `CONFIGRULES_LOG` for the tracing filter
//! - command-line flags (`-v`, `-l`, `--json`)
//! - `CONFIGRULES_PASSWORD` (via clap) when no positional password is given
//! - built-in defaults

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use configrules_core::container::CodecOptions;

use crate::args::Cli;

/// Environment variable overriding the log filter directive.
pub const LOG_ENV: &str = "CONFIGRULES_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub log_filter: String,
    /// A `CONFIGRULES_LOG` value that did not parse; the flag-derived
    /// filter is used instead and this is reported once logging is up.
    pub rejected_log_filter: Option<String>,
    pub options: CodecOptions,
    /// Empty when no password was supplied.
    pub password: String,
    pub json: bool,
}

impl ToolConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let fallback = if cli.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
        let env_filter = std::env::var(LOG_ENV).ok().filter(|f| !f.trim().is_empty());
        let (log_filter, rejected_log_filter) = resolve_log_filter(env_filter, fallback);

        let options = CodecOptions::with_level(cli.level)
            .with_context(|| format!("invalid compression level {}", cli.level))?;

        Ok(Self {
            log_filter,
            rejected_log_filter,
            options,
            password: cli.password.clone().unwrap_or_default(),
            json: cli.json,
        })
    }
}

/// Pick the env directive when it parses, else `fallback` plus the rejected value.
fn resolve_log_filter(env_filter: Option<String>, fallback: &str) -> (String, Option<String>) {
    match env_filter {
        Some(filter) if EnvFilter::try_new(&filter).is_ok() => (filter, None),
        Some(filter) => (fallback.to_string(), Some(filter)),
        None => (fallback.to_string(), None),
    }
}
