//! Stream descriptor
//!
//! A typed record for one media stream (video, audio, subtitle or lyrics
//! track) plus the display strings derived from it.

use std::fmt;

use crate::codec::{audio_suffix, channels_label, codec_label};
use crate::error::{Result, StreamError};
use crate::language::language_display_name;
use crate::types::{StreamKind, StreamType};

/// Id carried by the synthetic "no subtitles" stream
pub const NONE_STREAM_ID: i64 = 0;

/// One media stream of a playable item
#[derive(Debug, Clone)]
pub struct Stream {
    kind: StreamKind,
    stream_type: StreamType,
    pub codec: Option<String>,
    pub channels: Option<u32>,
    pub language_code: Option<String>,
    pub language: Option<String>,
    pub format: Option<String>,
    /// Resource key; `None` when the stream is embedded in the container.
    pub key: Option<String>,
    pub forced: bool,
    selected: bool,
    pub index: Option<i64>,
    pub id: Option<i64>,
}

impl Stream {
    /// Create an empty stream of the given type.
    pub fn new(stream_type: StreamType) -> Self {
        Self {
            kind: StreamKind::Regular,
            stream_type,
            codec: None,
            channels: None,
            language_code: None,
            language: None,
            format: None,
            key: None,
            forced: false,
            selected: false,
            index: None,
            id: None,
        }
    }

    /// The synthetic subtitle stream that stands for "no subtitles".
    pub fn none() -> Self {
        Self {
            kind: StreamKind::SyntheticNone,
            id: Some(NONE_STREAM_ID),
            ..Self::new(StreamType::Subtitle)
        }
    }

    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    pub fn is_none_stream(&self) -> bool {
        self.kind == StreamKind::SyntheticNone
    }

    /// Whether the stream lives inside the media container.
    pub fn is_embedded(&self) -> bool {
        self.key.is_none()
    }

    /// Human readable title, e.g. "English (AC3 5.1)".
    pub fn title(&self) -> String {
        if self.is_none_stream() {
            return "None".to_string();
        }

        match self.stream_type {
            StreamType::Video => {
                let codec = self.codec_label();
                if codec.is_empty() {
                    "Unknown".to_string()
                } else {
                    codec
                }
            }
            StreamType::Audio => {
                let mut title = self.language_name();
                if let Some(suffix) = audio_suffix(&self.codec_label(), &self.channels_label()) {
                    title.push_str(&suffix);
                }
                title
            }
            StreamType::Subtitle => {
                let mut title = self.language_name();
                let mut extras = Vec::new();

                let codec = self.codec_label();
                if !codec.is_empty() {
                    extras.push(codec);
                }
                if self.is_embedded() {
                    extras.push("Embedded".to_string());
                }
                if self.forced {
                    extras.push("Forced".to_string());
                }

                if !extras.is_empty() {
                    title.push_str(&format!(" ({})", extras.join("/")));
                }
                title
            }
            StreamType::Lyrics => match &self.format {
                Some(format) => format!("Lyrics ({})", format),
                None => "Lyrics".to_string(),
            },
            StreamType::Unknown | StreamType::Other(_) => self.language_name(),
        }
    }

    pub fn codec_label(&self) -> String {
        codec_label(self.codec.as_deref())
    }

    pub fn channels_label(&self) -> String {
        channels_label(self.channels)
    }

    pub fn language_name(&self) -> String {
        language_display_name(self.language_code.as_deref(), self.language.as_deref())
    }

    /// Path to fetch an external subtitle as UTF-8, with SAMI converted to SRT.
    pub fn subtitle_path(&self) -> Result<String> {
        let key = self
            .key
            .as_deref()
            .ok_or(StreamError::EmbeddedSubtitle(self.index))?;

        let mut path = format!("{}?encoding=utf-8", key);
        if self.codec.as_deref() == Some("smi") {
            path.push_str("&format=srt");
        }
        Ok(path)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Selection flag in its metadata encoding.
    pub fn selected_value(&self) -> &'static str {
        if self.selected {
            "1"
        } else {
            "0"
        }
    }

    /// Hook for refreshing metadata from the server. Streams are never
    /// refreshed on their own, so this does nothing.
    pub fn reload(&mut self) {
        tracing::trace!("reload requested for stream {:?}", self.id);
    }
}

impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.stream_type == other.stream_type
            && self.language == other.language
            && self.codec == other.codec
            && self.channels == other.channels
            && self.index == other.index
    }
}

impl Eq for Stream {}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
