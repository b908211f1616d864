//! Language display names
//!
//! Font support on the rendering side is limited, so languages written in
//! scripts it may not cover are shown with their English name instead of the
//! native one supplied by the server.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Language code to English name, for scripts with limited font support.
pub const SAFE_LANGUAGE_NAMES: [(&str, &str); 17] = [
    ("ara", "Arabic"),
    ("arm", "Armenian"),
    ("bel", "Belarusian"),
    ("ben", "Bengali"),
    ("bul", "Bulgarian"),
    ("chi", "Chinese"),
    ("cze", "Czech"),
    ("gre", "Greek"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("jpn", "Japanese"),
    ("kor", "Korean"),
    ("rus", "Russian"),
    ("srp", "Serbian"),
    ("tha", "Thai"),
    ("ukr", "Ukrainian"),
    ("yid", "Yiddish"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SAFE_LANGUAGE_NAMES.iter().copied().collect())
}

/// Look up the safe English name for a language code.
pub fn safe_language_name(code: &str) -> Option<&'static str> {
    table().get(code).copied()
}

/// Resolve the display name for a language code, falling back to the
/// free-text language field and finally to "Unknown".
pub fn language_display_name(code: Option<&str>, language: Option<&str>) -> String {
    let Some(code) = code else {
        return "Unknown".to_string();
    };

    if let Some(name) = safe_language_name(code) {
        return name.to_string();
    }

    tracing::debug!("no safe name for language code {}, using free text", code);
    language.unwrap_or("Unknown").to_string()
}
