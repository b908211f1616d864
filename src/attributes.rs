//! Metadata attribute boundary
//!
//! Stream metadata arrives as string attributes (the server's XML attributes,
//! or JSON values flattened to strings). Values are coerced to typed fields
//! once, when a [`Stream`] is built, and written back in the same encoding.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::stream::Stream;
use crate::types::StreamType;

/// Raw attribute map of one stream
pub type Attributes = BTreeMap<String, String>;

// Attribute names as used by the server.
const STREAM_TYPE: &str = "streamType";
const CODEC: &str = "codec";
const CHANNELS: &str = "channels";
const LANGUAGE_CODE: &str = "languageCode";
const LANGUAGE: &str = "language";
const FORMAT: &str = "format";
const KEY: &str = "key";
const FORCED: &str = "forced";
const SELECTED: &str = "selected";
const INDEX: &str = "index";
const ID: &str = "id";

/// Non-empty string value; empty strings count as absent.
fn text(attrs: &Attributes, name: &str) -> Option<String> {
    attrs
        .get(name)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Integer value; unparseable values count as absent.
fn int(attrs: &Attributes, name: &str) -> Option<i64> {
    let value = attrs.get(name)?;
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            if !value.is_empty() {
                tracing::debug!("attribute {}={:?} is not an integer", name, value);
            }
            None
        }
    }
}

/// Boolean flag: "1" or "true", anything else is `false`.
fn flag(attrs: &Attributes, name: &str) -> bool {
    attrs
        .get(name)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}

impl Stream {
    /// Build a stream from its raw metadata attributes.
    ///
    /// Missing or malformed values never fail: integers fall back to absent
    /// (or `Unknown` for the stream type) and flags to `false`.
    pub fn from_attributes(attrs: &Attributes) -> Stream {
        let stream_type = StreamType::from_i64(int(attrs, STREAM_TYPE).unwrap_or(0));

        let mut stream = Stream::new(stream_type);
        stream.codec = text(attrs, CODEC);
        stream.channels = int(attrs, CHANNELS)
            .and_then(|n| u32::try_from(n).ok());
        stream.language_code = text(attrs, LANGUAGE_CODE);
        stream.language = text(attrs, LANGUAGE);
        stream.format = text(attrs, FORMAT);
        stream.key = text(attrs, KEY);
        stream.forced = flag(attrs, FORCED);
        stream.index = int(attrs, INDEX);
        stream.id = int(attrs, ID);

        // Selection is an integer flag: only "1" counts.
        stream.set_selected(int(attrs, SELECTED) == Some(1));

        stream
    }

    /// Encode the stream back into metadata attributes.
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert(STREAM_TYPE.to_string(), self.stream_type().as_i64().to_string());

        let optional = [
            (CODEC, self.codec.clone()),
            (CHANNELS, self.channels.map(|n| n.to_string())),
            (LANGUAGE_CODE, self.language_code.clone()),
            (LANGUAGE, self.language.clone()),
            (FORMAT, self.format.clone()),
            (KEY, self.key.clone()),
            (INDEX, self.index.map(|n| n.to_string())),
            (ID, self.id.map(|n| n.to_string())),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                attrs.insert(name.to_string(), value);
            }
        }

        let forced = if self.forced { "1" } else { "0" };
        attrs.insert(FORCED.to_string(), forced.to_string());
        attrs.insert(SELECTED.to_string(), self.selected_value().to_string());
        attrs
    }
}

/// Flatten a JSON stream object into string attributes.
///
/// Strings are kept, numbers are formatted, booleans become "1"/"0".
/// Nulls and nested values are dropped. Returns `None` for non-objects.
pub fn attributes_from_json(value: &Value) -> Option<Attributes> {
    let object = value.as_object()?;

    let attrs = object
        .iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((name.clone(), value))
        })
        .collect();

    Some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_attributes_audio() {
        let s = Stream::from_attributes(&attrs(&[
            ("streamType", "2"),
            ("codec", "ac3"),
            ("channels", "6"),
            ("languageCode", "rus"),
            ("language", "Русский"),
            ("selected", "1"),
            ("index", "1"),
            ("id", "4711"),
        ]));
        assert_eq!(s.stream_type(), StreamType::Audio);
        assert_eq!(s.channels, Some(6));
        assert!(s.is_selected());
        assert!(!s.forced);
        assert_eq!(s.id, Some(4711));
        assert_eq!(s.title(), "Russian (AC3 5.1)");
    }

    #[test]
    fn test_malformed_values_default() {
        let s = Stream::from_attributes(&attrs(&[
            ("streamType", "audio"),
            ("channels", "six"),
            ("selected", "true"),
            ("key", ""),
        ]));
        assert_eq!(s.stream_type(), StreamType::Unknown);
        assert_eq!(s.channels, None);
        assert!(!s.is_selected());
        assert!(s.is_embedded());
    }

    #[test]
    fn test_negative_and_zero_channels() {
        let s = Stream::from_attributes(&attrs(&[("streamType", "2"), ("channels", "-2")]));
        assert_eq!(s.channels, None);
        let s = Stream::from_attributes(&attrs(&[("streamType", "2"), ("channels", "0")]));
        assert_eq!(s.channels, Some(0));
        assert_eq!(s.title(), "Unknown");
    }

    #[test]
    fn test_forced_flag_encodings() {
        for (value, expected) in [("1", true), ("true", true), ("TRUE", true), ("0", false), ("", false)] {
            let s = Stream::from_attributes(&attrs(&[("streamType", "3"), ("forced", value)]));
            assert_eq!(s.forced, expected, "forced={:?}", value);
        }
    }

    #[test]
    fn test_to_attributes_selection_encoding() {
        let mut s = Stream::from_attributes(&attrs(&[("streamType", "3"), ("codec", "srt")]));
        s.set_selected(true);
        let out = s.to_attributes();
        assert_eq!(out.get("selected").map(String::as_str), Some("1"));
        assert_eq!(out.get("forced").map(String::as_str), Some("0"));
        assert_eq!(out.get("streamType").map(String::as_str), Some("3"));
        assert!(!out.contains_key("key"));

        s.set_selected(false);
        assert_eq!(s.to_attributes().get("selected").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_attributes_from_json() {
        let value = json!({
            "streamType": 3,
            "codec": "srt",
            "forced": true,
            "selected": false,
            "key": null,
            "tags": ["a"],
        });
        let a = attributes_from_json(&value).unwrap();
        assert_eq!(a.get("streamType").map(String::as_str), Some("3"));
        assert_eq!(a.get("forced").map(String::as_str), Some("1"));
        assert_eq!(a.get("selected").map(String::as_str), Some("0"));
        assert!(!a.contains_key("key"));
        assert!(!a.contains_key("tags"));

        assert!(attributes_from_json(&json!([1, 2])).is_none());
    }
}
