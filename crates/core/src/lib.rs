// ABOUTME: Core media reference library for mediaref.
// ABOUTME: Provides link classification, link formatting, image link validation, and timecodes.

//! Resolve user-supplied media links into `(type, id)` references and back.
//!
//! ```
//! use mediaref_core::{classify, format_link, MediaType};
//!
//! let reference = classify("https://www.twitch.tv/videos/123456789").unwrap();
//! assert_eq!(reference.media_type, MediaType::TwitchVod);
//! assert_eq!(reference.id, "v123456789");
//! assert_eq!(format_link("tv", &reference.id, true), "tv:v123456789");
//! ```
//!
//! Everything here is a pure function of its input: no I/O, no logging and
//! no state between calls. Pattern tables are compiled once on first use.

pub mod classify;
pub mod error;
pub mod format;
pub mod image_link;
pub mod models;
pub mod query;
pub mod timecode;

pub use classify::{classify, classify_detailed, classify_value, rule_names, RuleMatch};
pub use error::MediaError;
pub use format::format_link;
pub use image_link::{
    validate_image_link, validate_image_link_detailed, validate_image_value, ImageHost, ImageLink,
};
pub use models::{Classification, MediaReference, MediaType};
pub use query::{extract_query_param, QueryParams};
pub use timecode::{parse_seconds, secs_to_time, timecode_to_secs};

// ----------------------------------------------------------------------------
// URL utilities
// ----------------------------------------------------------------------------

use once_cell::sync::Lazy;
use regex::Regex;

static HOSTNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)(?:.+?\.)*?([^./]*?\.[^./]*?)(?:[:/]|$)").unwrap()
});

/// Trims surrounding whitespace and any byte order mark.
pub(crate) fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Extracts the last two labels of the host of an HTTP(S) URL.
/// `https://www.youtube.com/watch?v=x` gives `youtube.com`.
pub fn get_hostname(link: &str) -> Option<&str> {
    HOSTNAME_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
