//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default project-local config path, relative to the current directory
pub const DEFAULT_CONFIG_PATH: &str = ".agent/config.yml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Agent executable configuration
    pub agent: AgentConfig,

    /// Prompt template configuration
    pub prompts: PromptsConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an explicit path or the default locations
    ///
    /// Checks in order:
    /// 1. Explicit `--config` path (missing file is an error)
    /// 2. Project-local `.agent/config.yml`
    /// 3. User config `~/.config/agent-dispatch/config.yml`
    ///
    /// A config file must exist somewhere; there is no built-in default run.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            debug!(?path, "Config::load: explicit config path");
            if !path.exists() {
                return Err(eyre::eyre!("Config not found at {}", path.display()));
            }
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(DEFAULT_CONFIG_PATH);
        if local_config.exists() {
            debug!(?local_config, "Config::load: found project-local config");
            return Self::load_from_file(&local_config)
                .context(format!("Failed to load config from {}", local_config.display()));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("agent-dispatch").join("config.yml");
            if user_config.exists() {
                debug!(?user_config, "Config::load: found user config");
                return Self::load_from_file(&user_config)
                    .context(format!("Failed to load config from {}", user_config.display()));
            }
        }

        debug!("Config::load: no config file found");
        Err(eyre::eyre!("Config not found at {}", local_config.display()))
    }

    /// Best-effort read of the log level before logging is initialized
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        // Errors here are reported properly by the real load afterwards
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        debug!(path = %path.as_ref().display(), "Config::load_from_file: loaded");
        Ok(config)
    }
}

/// Agent executable configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent executable name or path
    pub command: String,

    /// Flag that puts the agent in non-interactive print mode
    #[serde(rename = "print-flag")]
    pub print_flag: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: "claude".to_string(),
            print_flag: "--print".to_string(),
        }
    }
}

/// Prompt template configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory containing the markdown prompt templates
    pub dir: PathBuf,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".agent/prompts"),
        }
    }
}
