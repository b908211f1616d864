//! Tool configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};
use crate::stream::Stream;

/// Output formats understood by the log subscriber
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Configuration of the stream-titles tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Server base URL that subtitle paths are resolved against
    pub server_url: Option<String>,

    /// List the "None" entry before subtitle streams
    pub show_none_subtitle: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            server_url: None,
            show_none_subtitle: true,
        }
    }
}

impl ToolConfig {
    /// Check the configuration for values the tool can't use.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(StreamError::Config(
                    "server URL must start with http:// or https://".to_string(),
                ));
            }
        }

        if !LOG_FORMATS.contains(&self.log_format.as_str()) {
            return Err(StreamError::Config(format!(
                "unknown log format {:?}",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Full fetch URL of an external subtitle stream.
    ///
    /// Without a server URL this is the bare subtitle path.
    pub fn subtitle_url(&self, stream: &Stream) -> Result<String> {
        let path = stream.subtitle_path()?;
        Ok(match &self.server_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path,
        })
    }
}
