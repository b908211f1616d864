//! Streams of one media part, and track selection across them.

use serde_json::Value;

use crate::attributes::attributes_from_json;
use crate::error::{Result, StreamError};
use crate::stream::Stream;
use crate::types::StreamType;

/// All streams belonging to one playable part of a media item
#[derive(Debug, Clone, Default)]
pub struct MediaPart {
    streams: Vec<Stream>,
}

impl MediaPart {
    pub fn new(streams: Vec<Stream>) -> Self {
        Self { streams }
    }

    /// Parse a part from JSON.
    ///
    /// Accepts either an array of stream objects or a part object holding
    /// them under `"Stream"`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;

        let list = match &value {
            Value::Array(list) => list,
            Value::Object(object) => match object.get("Stream") {
                Some(Value::Array(list)) => list,
                Some(_) => {
                    return Err(StreamError::InvalidMetadata(
                        "\"Stream\" is not an array".to_string(),
                    ))
                }
                None => return Ok(Self::default()),
            },
            _ => {
                return Err(StreamError::InvalidMetadata(
                    "expected a stream array or a part object".to_string(),
                ))
            }
        };

        let mut streams = Vec::with_capacity(list.len());
        for (pos, item) in list.iter().enumerate() {
            let attrs = attributes_from_json(item).ok_or_else(|| {
                StreamError::InvalidMetadata(format!("stream #{} is not an object", pos))
            })?;
            streams.push(Stream::from_attributes(&attrs));
        }

        tracing::debug!("parsed media part with {} streams", streams.len());
        Ok(Self { streams })
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn streams_of_type(&self, stream_type: StreamType) -> impl Iterator<Item = &Stream> {
        self.streams
            .iter()
            .filter(move |s| s.stream_type() == stream_type)
    }

    pub fn stream_by_id(&self, id: i64) -> Option<&Stream> {
        self.streams.iter().find(|s| s.id == Some(id))
    }

    /// The first selected stream of a type.
    pub fn selected_stream(&self, stream_type: StreamType) -> Option<&Stream> {
        self.streams_of_type(stream_type).find(|s| s.is_selected())
    }

    /// The selected subtitle, or the "None" stream when subtitles are off.
    pub fn selected_subtitle(&self) -> Stream {
        self.selected_stream(StreamType::Subtitle)
            .cloned()
            .unwrap_or_else(Stream::none)
    }

    /// Subtitle options as offered to the user: "None" first.
    pub fn subtitle_choices(&self) -> Vec<Stream> {
        let mut choices = vec![Stream::none()];
        choices.extend(self.streams_of_type(StreamType::Subtitle).cloned());
        choices
    }

    /// Make `target` the active stream of its type.
    ///
    /// Every other stream of the same type is deselected. Selecting the
    /// "None" stream turns all subtitles off. Returns whether a stream in
    /// this part was selected.
    pub fn set_selected_stream(&mut self, target: &Stream) -> bool {
        let stream_type = target.stream_type();
        let mut found = false;

        for stream in self
            .streams
            .iter_mut()
            .filter(|s| s.stream_type() == stream_type)
        {
            let selected = *stream == *target;
            found |= selected;
            stream.set_selected(selected);
        }

        if !found && !target.is_none_stream() {
            tracing::warn!("stream {:?} ({}) is not part of this media part", target.id, target);
        }
        found
    }
}
