//! Media stream descriptors
//!
//! Derives display titles and labels (codec, channels, language, subtitle
//! path) from the metadata of video, audio, subtitle and lyrics streams.

pub mod attributes;
pub mod codec;
pub mod config;
pub mod config_file;
pub mod error;
pub mod language;
pub mod part;
pub mod stream;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use attributes::{attributes_from_json, Attributes};
pub use error::{Result, StreamError};
pub use part::MediaPart;
pub use stream::{Stream, NONE_STREAM_ID};
pub use types::{StreamKind, StreamType};
