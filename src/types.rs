use std::fmt;

/// Media stream type, as carried in the `streamType` metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    Unknown,
    Video,
    Audio,
    Subtitle,
    Lyrics,
    /// Any type number this crate has no name for
    Other(i64),
}

impl StreamType {
    pub fn from_i64(value: i64) -> Self {
        match value {
            0 => StreamType::Unknown,
            1 => StreamType::Video,
            2 => StreamType::Audio,
            3 => StreamType::Subtitle,
            4 => StreamType::Lyrics,
            n => StreamType::Other(n),
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            StreamType::Unknown => 0,
            StreamType::Video => 1,
            StreamType::Audio => 2,
            StreamType::Subtitle => 3,
            StreamType::Lyrics => 4,
            StreamType::Other(n) => *n,
        }
    }

    /// Parse a type name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "unknown" => Some(StreamType::Unknown),
            "video" => Some(StreamType::Video),
            "audio" => Some(StreamType::Audio),
            "subtitle" | "subtitles" => Some(StreamType::Subtitle),
            "lyrics" => Some(StreamType::Lyrics),
            _ => None,
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StreamType::Unknown => write!(f, "Unknown"),
            StreamType::Video => write!(f, "Video"),
            StreamType::Audio => write!(f, "Audio"),
            StreamType::Subtitle => write!(f, "Subtitle"),
            StreamType::Lyrics => write!(f, "Lyrics"),
            StreamType::Other(n) => write!(f, "Type{}", n),
        }
    }
}

/// Whether a stream is backed by metadata or synthesized locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Regular,
    /// The "no subtitles" entry offered next to real subtitle streams.
    SyntheticNone,
}
