// ABOUTME: Link formatter, the inverse of classification.
// ABOUTME: Builds a canonical URL or the short type:id form from a media type code and id.

use crate::models::{MediaReference, MediaType};

/// Creates a full link from a media type code and id, or the short form.
///
/// Returns an empty string when either part is empty or when the type has
/// no canonical URL (`yp`, `tv` and unknown codes). The short form is
/// `code:id` for any code and is not checked against the classifier.
///
/// Types whose id already is a locator (`sc`, `rt`, `fi`, `hl`, `cm`) return
/// the id unchanged.
pub fn format_link(code: &str, id: &str, short: bool) -> String {
    if code.is_empty() || id.is_empty() {
        return String::new();
    }
    if short {
        return format!("{}:{}", code, id);
    }

    match MediaType::from_code(code) {
        MediaType::YouTube => format!("https://youtu.be/{}", id),
        MediaType::Vimeo => format!("https://vimeo.com/{}", id),
        MediaType::Dailymotion => format!("https://dailymotion.com/video/{}", id),
        MediaType::Livestream => format!("https://livestream.com/{}", id),
        MediaType::Twitch => format!("https://twitch.tv/{}", id),
        MediaType::TwitchClip => format!("https://clips.twitch.tv/{}", id),
        MediaType::Imgur => format!("https://imgur.com/a/{}", id),
        MediaType::Ustream => format!("https://ustream.tv/channel/{}", id),
        MediaType::GoogleDrive => format!("https://docs.google.com/file/d/{}", id),
        MediaType::Hitbox => format!("https://www.smashcast.tv/{}", id),
        MediaType::Streamable => format!("https://streamable.com/{}", id),
        MediaType::SoundCloud
        | MediaType::Rtmp
        | MediaType::RawFile
        | MediaType::Hls
        | MediaType::CustomManifest => id.to_string(),
        MediaType::YouTubePlaylist | MediaType::TwitchVod | MediaType::Other(_) => String::new(),
    }
}

impl MediaReference {
    /// Formats this reference as a full link, or as `type:id` when `short`.
    pub fn to_link(&self, short: bool) -> String {
        format_link(self.media_type.code(), &self.id, short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_long_and_short() {
        assert_eq!(
            format_link("yt", "dQw4w9WgXcQ", false),
            "https://youtu.be/dQw4w9WgXcQ"
        );
        assert_eq!(format_link("yt", "dQw4w9WgXcQ", true), "yt:dQw4w9WgXcQ");
    }

    #[test]
    fn test_empty_parts_yield_empty() {
        assert_eq!(format_link("yt", "", false), "");
        assert_eq!(format_link("yt", "", true), "");
        assert_eq!(format_link("", "id", false), "");
        assert_eq!(format_link("", "id", true), "");
    }

    #[test]
    fn test_prefixed_hosts() {
        let cases = [
            ("vi", "76979871", "https://vimeo.com/76979871"),
            ("dm", "x7tgad0", "https://dailymotion.com/video/x7tgad0"),
            ("li", "accounts/1", "https://livestream.com/accounts/1"),
            ("tw", "chan", "https://twitch.tv/chan"),
            ("tc", "Clip", "https://clips.twitch.tv/Clip"),
            ("im", "abc", "https://imgur.com/a/abc"),
            ("us", "foo", "https://ustream.tv/channel/foo"),
            ("gd", "0Bxyz", "https://docs.google.com/file/d/0Bxyz"),
            ("hb", "someone", "https://www.smashcast.tv/someone"),
            ("sb", "moo", "https://streamable.com/moo"),
        ];
        for (code, id, expected) in cases {
            assert_eq!(format_link(code, id, false), expected, "{code}");
        }
    }

    #[test]
    fn test_locator_ids_pass_through() {
        for code in ["sc", "rt", "fi", "hl", "cm"] {
            assert_eq!(
                format_link(code, "https://example.com/a?b=1", false),
                "https://example.com/a?b=1"
            );
        }
    }

    #[test]
    fn test_playlists_and_vods_have_no_long_form() {
        assert_eq!(format_link("yp", "PL1", false), "");
        assert_eq!(format_link("tv", "v123456789", false), "");
        assert_eq!(format_link("tv", "c42", false), "");
        assert_eq!(format_link("yp", "PL1", true), "yp:PL1");
        assert_eq!(format_link("tv", "c42", true), "tv:c42");
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(format_link("xy", "abc", false), "");
        assert_eq!(format_link("xy", "abc", true), "xy:abc");
        assert_eq!(format_link("youtube", "abc", false), "");
    }

    #[test]
    fn test_reference_to_link() {
        let reference = MediaReference::new(MediaType::Streamable, "moo");
        assert_eq!(reference.to_link(false), "https://streamable.com/moo");
        assert_eq!(reference.to_link(true), "sb:moo");
    }
}
