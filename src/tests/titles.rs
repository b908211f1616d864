//! Title, label and path scenarios

use super::fixtures::{dts_audio, stream};
use crate::stream::Stream;

#[test]
fn video_with_codec() {
    assert_eq!(stream(&[("streamType", "1"), ("codec", "h264")]).title(), "H264");
}

#[test]
fn video_without_codec() {
    assert_eq!(stream(&[("streamType", "1")]).title(), "Unknown");
}

#[test]
fn audio_without_language_code() {
    // The free-text language is only a fallback for an unmapped code.
    assert_eq!(dts_audio("1").title(), "Unknown (DTS 5.1)");
}

#[test]
fn audio_with_unmapped_code_uses_free_text() {
    let s = stream(&[
        ("streamType", "2"),
        ("codec", "eac3"),
        ("channels", "8"),
        ("languageCode", "tlh"),
        ("language", "Klingon"),
    ]);
    assert_eq!(s.title(), "Klingon (EAC3 7.1)");
}

#[test]
fn embedded_forced_subtitle() {
    let s = stream(&[("streamType", "3"), ("codec", "srt"), ("forced", "1")]);
    assert_eq!(s.title(), "Unknown (SRT/Embedded/Forced)");
}

#[test]
fn external_subtitle_with_language() {
    let s = stream(&[
        ("streamType", "3"),
        ("codec", "srt"),
        ("languageCode", "heb"),
        ("key", "/library/streams/31"),
    ]);
    assert_eq!(s.title(), "Hebrew (SRT)");
}

#[test]
fn lyrics() {
    assert_eq!(
        stream(&[("streamType", "4"), ("format", "lrc")]).title(),
        "Lyrics (lrc)"
    );
    assert_eq!(stream(&[("streamType", "4")]).title(), "Lyrics");
}

#[test]
fn none_stream_title_is_fixed() {
    let mut s = Stream::none();
    s.language_code = Some("jpn".to_string());
    s.key = Some("/library/streams/1".to_string());
    assert_eq!(s.title(), "None");
    assert_eq!(format!("{}", s), "None");
}

#[test]
fn display_matches_title() {
    let s = dts_audio("1");
    assert_eq!(s.to_string(), s.title());
}

#[test]
fn subtitle_paths() {
    let smi = stream(&[("streamType", "3"), ("codec", "smi"), ("key", "/lib/123")]);
    assert_eq!(
        smi.subtitle_path().unwrap(),
        "/lib/123?encoding=utf-8&format=srt"
    );

    let srt = stream(&[("streamType", "3"), ("codec", "srt"), ("key", "/lib/123")]);
    assert_eq!(srt.subtitle_path().unwrap(), "/lib/123?encoding=utf-8");
}

#[test]
fn selection_round_trip() {
    let mut s = stream(&[("streamType", "2"), ("selected", "0")]);
    s.set_selected(true);
    assert!(s.is_selected());
    assert_eq!(s.to_attributes()["selected"], "1");
    s.set_selected(false);
    assert!(!s.is_selected());
    assert_eq!(s.to_attributes()["selected"], "0");
}
