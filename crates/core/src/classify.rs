// ABOUTME: Ordered rule engine mapping user-supplied text to a MediaReference.
// ABOUTME: Rules run most-specific first; the first one that yields an id wins.

//! Media reference classification.
//!
//! Input is trimmed and stripped of the legacy `feature=player_embedded&`
//! query fragment, then tested against [`RULES`] in order. Host rules are
//! unanchored substring matches, so the order is load-bearing: Twitch clip
//! and VOD forms must be tried before the generic Twitch channel form, and
//! the specific `dm:`/`fi:`/`cm:` shorthands before the generic `xx:` one.
//!
//! A rule whose pattern matches but which cannot produce a non-empty id (a
//! watch URL without `v=`, say) is skipped and evaluation continues.
//!
//! When no rule applies, any bare `http://` or `https://` URL is accepted as
//! a raw file, or as a custom manifest when its path ends in `.json`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::Value;

use crate::models::{Classification, MediaReference, MediaType};
use crate::query::extract_query_param;

/// Legacy query fragment removed from every input before matching.
const PLAYER_EMBEDDED: &str = "feature=player_embedded&";

/// A classified reference together with the name of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub reference: MediaReference,
}

/// How a rule turns its captures into a reference.
enum Extract {
    /// Capture group 1 is the id.
    Group(MediaType),
    /// The whole preprocessed input is the id.
    Whole(MediaType),
    /// Capture group 1 is a query string; the id is the named parameter.
    QueryParam(MediaType, &'static str),
    Custom(fn(&Captures<'_>, &str) -> Option<MediaReference>),
}

impl Extract {
    fn apply(&self, caps: &Captures<'_>, input: &str) -> Option<MediaReference> {
        let reference = match self {
            Extract::Group(media_type) => {
                MediaReference::new(media_type.clone(), caps.get(1)?.as_str())
            }
            Extract::Whole(media_type) => MediaReference::new(media_type.clone(), input),
            Extract::QueryParam(media_type, key) => {
                let value = extract_query_param(caps.get(1)?.as_str(), key)?;
                MediaReference::new(media_type.clone(), value)
            }
            Extract::Custom(extract) => extract(caps, input)?,
        };
        (!reference.id.is_empty()).then_some(reference)
    }
}

struct Rule {
    name: &'static str,
    pattern: Regex,
    extract: Extract,
}

fn rule(name: &'static str, pattern: &str, extract: Extract) -> Rule {
    Rule {
        name,
        pattern: Regex::new(pattern).unwrap(),
        extract,
    }
}

/// Twitch VODs are identified by the path letter followed by the number.
fn twitch_vod(caps: &Captures<'_>, _input: &str) -> Option<MediaReference> {
    let id = format!("{}{}", caps.get(1)?.as_str(), caps.get(2)?.as_str());
    Some(MediaReference::new(MediaType::TwitchVod, id))
}

/// `/videos/<n>` is the newer shape of `/v/<n>` and maps to the same id.
fn twitch_videos(caps: &Captures<'_>, _input: &str) -> Option<MediaReference> {
    let id = format!("v{}", caps.get(1)?.as_str());
    Some(MediaReference::new(MediaType::TwitchVod, id))
}

fn generic_shorthand(caps: &Captures<'_>, _input: &str) -> Option<MediaReference> {
    let media_type = MediaType::from_code(caps.get(1)?.as_str());
    Some(MediaReference::new(media_type, caps.get(2)?.as_str()))
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use Extract::*;
    use MediaType::*;

    vec![
        rule("rtmp", r"^rtmp://", Whole(Rtmp)),
        rule("youtube-watch", r"youtube\.com/watch\?([^#]+)", QueryParam(YouTube, "v")),
        rule("youtube-shorts", r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})", Group(YouTube)),
        rule("youtu-be", r"youtu\.be/([^?&#]+)", Group(YouTube)),
        rule(
            "youtube-playlist",
            r"youtube\.com/playlist\?([^#]+)",
            QueryParam(YouTubePlaylist, "list"),
        ),
        rule("twitch-clip-host", r"clips\.twitch\.tv/([A-Za-z]+)", Group(TwitchClip)),
        rule("twitch-clip-path", r"twitch\.tv/(?:.*?)/clip/([A-Za-z]+)", Group(TwitchClip)),
        rule("twitch-vod", r"twitch\.tv/(?:.*?)/([cv])/([0-9]+)", Custom(twitch_vod)),
        rule("twitch-videos", r"twitch\.tv/videos/([0-9]+)", Custom(twitch_videos)),
        rule("twitch-channel", r"twitch\.tv/([A-Za-z0-9_-]+)", Group(Twitch)),
        rule("livestream", r"livestream\.com/([^?&#]+)", Group(Livestream)),
        rule("ustream", r"ustream\.tv/([^?&#]+)", Group(Ustream)),
        rule("smashcast", r"(?:hitbox|smashcast)\.tv/([^?&#]+)", Group(Hitbox)),
        rule("vimeo", r"vimeo\.com/([^?&#]+)", Group(Vimeo)),
        rule("dailymotion", r"dailymotion\.com/video/([^?&#_]+)", Group(Dailymotion)),
        rule("soundcloud", r"soundcloud\.com/([^?&#]+)", Whole(SoundCloud)),
        rule(
            "google-drive-file",
            r"(?:docs|drive)\.google\.com/file/d/([a-zA-Z0-9_-]+)",
            Group(GoogleDrive),
        ),
        rule(
            "google-drive-open",
            r"drive\.google\.com/open\?id=([a-zA-Z0-9_-]+)",
            Group(GoogleDrive),
        ),
        rule("hls", r"\.m3u8", Whole(Hls)),
        rule("streamable", r"streamable\.com/([A-Za-z0-9_-]+)", Group(Streamable)),
        // Dailymotion shorthand still trims the slug after `_`.
        rule("dm-shorthand", r"^dm:([^?&#_]+)", Group(Dailymotion)),
        // Raw files and manifests keep their query string.
        rule("fi-shorthand", r"^fi:(.+)", Group(RawFile)),
        rule("cm-shorthand", r"^cm:(.+)", Group(CustomManifest)),
        rule("shorthand", r"^([a-z]{2}):([^?&#]+)", Custom(generic_shorthand)),
    ]
});

/// Only the first `feature=player_embedded&` is removed.
fn preprocess(raw: &str) -> String {
    crate::trim_text(raw).replacen(PLAYER_EMBEDDED, "", 1)
}

/// Catch-all for bare HTTP(S) URLs no host rule recognised.
fn classify_raw_url(input: &str) -> Option<RuleMatch> {
    let path = input.split_once('?').map_or(input, |(head, _)| head);
    if !(path.starts_with("http://") || path.starts_with("https://")) {
        return None;
    }

    let (rule, media_type) = if path.ends_with(".json") {
        ("custom-manifest", MediaType::CustomManifest)
    } else {
        ("raw-file", MediaType::RawFile)
    };
    Some(RuleMatch {
        rule,
        reference: MediaReference::new(media_type, input),
    })
}

/// Classifies `raw` and reports which rule matched.
pub fn classify_detailed(raw: &str) -> Option<RuleMatch> {
    let input = preprocess(raw);

    for rule in RULES.iter() {
        let Some(caps) = rule.pattern.captures(&input) else {
            continue;
        };
        if let Some(reference) = rule.extract.apply(&caps, &input) {
            return Some(RuleMatch {
                rule: rule.name,
                reference,
            });
        }
    }

    classify_raw_url(&input)
}

/// Classifies a pasted link, shorthand reference or raw media URL.
///
/// Returns `None` when the text matches no rule and is not an HTTP(S) URL.
///
/// ```
/// use mediaref_core::{classify, MediaType};
///
/// let reference = classify("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(reference.media_type, MediaType::YouTube);
/// assert_eq!(reference.id, "dQw4w9WgXcQ");
/// ```
pub fn classify(raw: &str) -> Option<MediaReference> {
    classify_detailed(raw).map(|m| m.reference)
}

/// Classifies a dynamically typed value, such as a field of a JSON payload.
///
/// Anything that is not a string yields [`Classification::NotText`], which
/// is kept distinct from a string that matched nothing.
pub fn classify_value(value: &Value) -> Classification {
    match value.as_str() {
        Some(raw) => classify(raw).into(),
        None => Classification::NotText,
    }
}

/// Names of all rules in evaluation order, catch-all rules last.
pub fn rule_names() -> Vec<&'static str> {
    RULES
        .iter()
        .map(|rule| rule.name)
        .chain(["custom-manifest", "raw-file"])
        .collect()
}
