use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "roman-calc.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repl: ReplConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    /// Line-editor history; empty disables it
    pub history_file: String,
    pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

/// What the REPL does after a line fails to evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the error and prompt for the next expression
    #[default]
    Continue,
    /// Report the error and stop
    Abort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "> ".to_string(),
            history_file: default_history_file()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            on_error: ErrorPolicy::Continue,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roman-calc-history"))
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path.as_ref()))?;

        log::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Load config from default locations
    pub fn load_default() -> Result<Self> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            return Self::load(CONFIG_FILE_NAME);
        }

        if let Some(config_path) = Self::user_config_path() {
            if config_path.exists() {
                return Self::load(config_path);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// `~/.config/roman-calc/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join("roman-calc")
                .join("config.toml")
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config to {:?}", path.as_ref()))?;

        Ok(())
    }

    pub fn history_path(&self) -> Option<PathBuf> {
        if self.repl.history_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.repl.history_file))
        }
    }
}
