//! Codec and channel labels
//!
//! Turns the short codec name and channel count from stream metadata into
//! the labels shown in track titles.

/// Display label for a raw codec name
pub fn codec_label(codec: Option<&str>) -> String {
    match codec {
        None | Some("") => String::new(),
        Some("dca") => "DTS".to_string(), // ffmpeg's name for DTS
        Some(c) => c.to_uppercase(),
    }
}

/// Display label for an audio channel count
pub fn channels_label(channels: Option<u32>) -> String {
    match channels {
        Some(1) => "Mono".to_string(),
        Some(2) => "Stereo".to_string(),
        Some(n) if n > 2 => format!("{}.1", n - 1),
        _ => String::new(),
    }
}

/// Combine codec and channel labels into an audio title suffix
pub fn audio_suffix(codec: &str, channels: &str) -> Option<String> {
    match (codec.is_empty(), channels.is_empty()) {
        (false, false) => Some(format!(" ({} {})", codec, channels)),
        (true, true) => None,
        _ => Some(format!(" ({}{})", codec, channels)),
    }
}
