use thiserror::Error;

/// Main error type for stream metadata handling
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Embedded subtitles have no resource key to fetch from
    #[error("Subtitle stream is embedded and has no fetchable path: index={0:?}")]
    EmbeddedSubtitle(Option<i64>),

    #[error("Invalid stream metadata: {0}")]
    InvalidMetadata(String),

    #[error("Stream not found: {0}")]
    StreamNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StreamError>;
