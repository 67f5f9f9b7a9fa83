//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.maxlength-prompt/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all
//! options. `--config <path>` points at a different file, which is never
//! generated.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::options::PromptOptions;
use crate::core::validate::RequiredValidator;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub prompt: PromptSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptSection {
    pub name: Option<String>,
    pub message: Option<String>,
    pub max_length: Option<usize>,
    pub default: Option<String>,
    pub filter: Option<NamedFilter>,
    pub required: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogSection {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Built-in filters selectable from config or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamedFilter {
    #[default]
    None,
    Trim,
    Lowercase,
    Uppercase,
}

impl NamedFilter {
    pub fn apply(self, value: &str) -> String {
        match self {
            NamedFilter::None => value.to_string(),
            NamedFilter::Trim => value.trim().to_string(),
            NamedFilter::Lowercase => value.to_lowercase(),
            NamedFilter::Uppercase => value.to_uppercase(),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NAME: &str = "answer";
pub const DEFAULT_MESSAGE: &str = "Enter a value";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// CLI overrides (filled from clap in main)
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub message: Option<String>,
    pub max_length: Option<usize>,
    pub default: Option<String>,
    pub filter: Option<NamedFilter>,
    /// `Some(false)` turns off a `required = true` from the file.
    pub required: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<log::LevelFilter>,
}

// ============================================================================
// Resolved Config (concrete values; max_length stays optional until the
// prompt is built, which is where a missing value is reported)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub name: String,
    pub message: String,
    pub max_length: Option<usize>,
    pub default: Option<String>,
    pub filter: NamedFilter,
    pub required: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
}

impl ResolvedConfig {
    /// Translate into prompt options. Construction errors are left to `check()`.
    pub fn prompt_options(&self) -> PromptOptions {
        let mut options = PromptOptions::new(self.message.clone()).name(self.name.clone());
        options.max_length = self.max_length;
        options.default = self.default.clone();
        if self.filter != NamedFilter::None {
            let filter = self.filter;
            options = options.filter(move |value| filter.apply(value));
        }
        if self.required {
            options = options.validate(std::sync::Arc::new(RequiredValidator));
        }
        options
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.maxlength-prompt/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".maxlength-prompt").join("config.toml"))
}

/// Load config from `explicit` or the default location.
///
/// A missing default file is generated and yields `FileConfig::default()`.
/// A missing explicit file is an `Io` error. A malformed file is `Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(FileConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FileConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# maxlength-prompt configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [prompt]
# name = "answer"                 # key used by --json output
# message = "Enter a value"
# max_length = 20                 # required here, via env, or via --max-length
# default = ""                    # text the line is pre-filled with
# filter = "trim"                 # "none", "trim", "lowercase", "uppercase"
# required = false                # reject blank answers

# [log]
# file = "/tmp/maxlength-prompt.log"  # logging is off unless a file is set
# level = "info"                      # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Reads an env var the way `resolve()` does. Split out so tests can inject.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FileConfig, cli: &CliOverrides, env: &dyn Env) -> ResolvedConfig {
    let message = cli
        .message
        .clone()
        .or_else(|| env.var("MAXLENGTH_PROMPT_MESSAGE"))
        .or_else(|| config.prompt.message.clone())
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    // Unparseable env values are ignored rather than treated as "missing"
    let env_max_length = env.var("MAXLENGTH_PROMPT_MAX_LENGTH").and_then(|raw| {
        raw.trim()
            .parse::<usize>()
            .map_err(|e| warn!("Ignoring MAXLENGTH_PROMPT_MAX_LENGTH={raw:?}: {e}"))
            .ok()
    });
    let max_length = cli.max_length.or(env_max_length).or(config.prompt.max_length);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env.var("MAXLENGTH_PROMPT_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.log.file.clone());

    let log_level = cli
        .log_level
        .or_else(|| {
            config.log.level.as_deref().and_then(|level| {
                log::LevelFilter::from_str(level)
                    .map_err(|_| warn!("Ignoring unknown log level {level:?}"))
                    .ok()
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        name: cli
            .name
            .clone()
            .or_else(|| config.prompt.name.clone())
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        message,
        max_length,
        default: cli.default.clone().or_else(|| config.prompt.default.clone()),
        filter: cli.filter.or(config.prompt.filter).unwrap_or_default(),
        required: cli.required.or(config.prompt.required).unwrap_or(false),
        log_file,
        log_level,
    }
}
