// ABOUTME: Image link validation against a fixed list of trusted image hosts.
// ABOUTME: Accepts HTTPS links only and returns the matched part re-prefixed with https://.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// A trusted image host recognised by [`validate_image_link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageHost {
    Discord,
    FourChan,
    Gyazo,
    Tumblr,
    Puush,
    Reddit,
    Gfycat,
}

/// A validated image link and the host pattern it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageLink {
    pub host: ImageHost,
    pub url: String,
}

/// Host patterns in the order they are tried.
///
/// Case folding is ASCII-only (`(?i-u)`), so look-alike code points such as
/// `ſ` never stand in for a host letter. The Discord file name class is the
/// one Unicode-aware part.
static IMAGE_PATTERNS: Lazy<Vec<(ImageHost, Regex)>> = Lazy::new(|| {
    let patterns = [
        (
            ImageHost::Discord,
            r#"(?:cdn\.discordapp\.com|media\.discordapp\.net)/attachments/[0-9]+/[0-9]+/(?u:[^\s\x00\\/:*?"<>|])+\.(?:jpe?g|gif|png|webp)"#,
        ),
        (
            ImageHost::FourChan,
            r"is?[0-9]?\.(?:4cdn|4chan)\.org/[A-Za-z0-9_]{1,6}/[0-9]{8,15}\.(?:jpe?g|gif|png|webp)",
        ),
        (
            ImageHost::Gyazo,
            r"i\.gyazo\.com/[A-Za-z0-9_]+\.(?:jpe?g|gif|png|webp)",
        ),
        (
            ImageHost::Tumblr,
            r"(?:[0-9]+\.)?(?:static|media)\.tumblr\.com/(?:[A-Za-z0-9_]+/)*tumblr_[A-Za-z0-9_]+(?:_[A-Za-z0-9_]+)?\.(?:jpe?g|gif|png|webp)",
        ),
        (
            ImageHost::Puush,
            r"puu\.sh/[A-Za-z0-9_]+/[A-Za-z0-9_]+\.(?:jpe?g|gif|png|webp)",
        ),
        (
            ImageHost::Reddit,
            r"i\.redd\.it/[A-Za-z0-9_]+\.(?:jpe?g|gif|png|webp)",
        ),
        (ImageHost::Gfycat, r"giant\.gfycat\.com/[A-Za-z0-9_]+\.gif"),
    ];

    patterns
        .into_iter()
        .map(|(host, pattern)| (host, Regex::new(&format!("(?i-u){}", pattern)).unwrap()))
        .collect()
});

fn has_https_prefix(s: &str) -> bool {
    s.get(..8)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("https://"))
}

/// Validates an image link and reports which trusted host it matched.
pub fn validate_image_link_detailed(s: &str) -> Option<ImageLink> {
    let s = crate::trim_text(s);
    if !has_https_prefix(s) {
        return None;
    }

    IMAGE_PATTERNS.iter().find_map(|(host, pattern)| {
        pattern.find(s).map(|m| ImageLink {
            host: *host,
            url: format!("https://{}", m.as_str()),
        })
    })
}

/// Checks an image link against the trusted host patterns.
///
/// Returns the normalized `https://` URL, which ends at the image extension:
/// any query string or trailing text after the match is dropped. Returns
/// `None` for non-HTTPS input or an unrecognised host.
pub fn validate_image_link(s: &str) -> Option<String> {
    validate_image_link_detailed(s).map(|link| link.url)
}

/// Like [`validate_image_link`], for dynamically typed input. Non-strings are rejected.
pub fn validate_image_value(value: &Value) -> Option<String> {
    value.as_str().and_then(validate_image_link)
}
