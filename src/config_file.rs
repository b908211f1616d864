//! Configuration file support
//!
//! Loads tool configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ToolConfig;
use crate::error::Result;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Display settings
    pub display: Option<DisplaySettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Server base URL for subtitle fetch paths
    pub server_url: Option<String>,
    /// List the "None" subtitle entry
    pub show_none_subtitle: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
            display: Some(DisplaySettings {
                server_url: None,
                show_none_subtitle: Some(true),
            }),
        }
    }

    /// Convert to ToolConfig
    pub fn into_tool_config(self) -> ToolConfig {
        let defaults = ToolConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };

        ToolConfig {
            log_level,
            log_format,
            server_url: self.display.as_ref().and_then(|d| d.server_url.clone()),
            show_none_subtitle: self
                .display
                .as_ref()
                .and_then(|d| d.show_none_subtitle)
                .unwrap_or(defaults.show_none_subtitle),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
