// ABOUTME: Data model for classified media: MediaType codes and MediaReference pairs.
// ABOUTME: Also defines Classification, which keeps the non-text sentinel distinct from no match.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::MediaError;

/// The hosting service or reference kind of a media item.
///
/// Every variant has a two-letter code, which is also the prefix of the
/// shorthand `code:id` form. Codes without a named variant are kept in
/// [`MediaType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MediaType {
    YouTube,
    YouTubePlaylist,
    Vimeo,
    Dailymotion,
    SoundCloud,
    Livestream,
    Twitch,
    TwitchClip,
    TwitchVod,
    Ustream,
    /// Hitbox, later renamed Smashcast.
    Hitbox,
    GoogleDrive,
    Hls,
    Streamable,
    Rtmp,
    RawFile,
    CustomManifest,
    /// Imgur album. Only reachable through the `im:` shorthand.
    Imgur,
    Other(String),
}

impl MediaType {
    /// Maps a code to its named variant, or to `Other` for anything unknown.
    pub fn from_code(code: &str) -> Self {
        match code {
            "yt" => MediaType::YouTube,
            "yp" => MediaType::YouTubePlaylist,
            "vi" => MediaType::Vimeo,
            "dm" => MediaType::Dailymotion,
            "sc" => MediaType::SoundCloud,
            "li" => MediaType::Livestream,
            "tw" => MediaType::Twitch,
            "tc" => MediaType::TwitchClip,
            "tv" => MediaType::TwitchVod,
            "us" => MediaType::Ustream,
            "hb" => MediaType::Hitbox,
            "gd" => MediaType::GoogleDrive,
            "hl" => MediaType::Hls,
            "sb" => MediaType::Streamable,
            "rt" => MediaType::Rtmp,
            "fi" => MediaType::RawFile,
            "cm" => MediaType::CustomManifest,
            "im" => MediaType::Imgur,
            other => MediaType::Other(other.to_string()),
        }
    }

    /// The two-letter code of this type.
    pub fn code(&self) -> &str {
        match self {
            MediaType::YouTube => "yt",
            MediaType::YouTubePlaylist => "yp",
            MediaType::Vimeo => "vi",
            MediaType::Dailymotion => "dm",
            MediaType::SoundCloud => "sc",
            MediaType::Livestream => "li",
            MediaType::Twitch => "tw",
            MediaType::TwitchClip => "tc",
            MediaType::TwitchVod => "tv",
            MediaType::Ustream => "us",
            MediaType::Hitbox => "hb",
            MediaType::GoogleDrive => "gd",
            MediaType::Hls => "hl",
            MediaType::Streamable => "sb",
            MediaType::Rtmp => "rt",
            MediaType::RawFile => "fi",
            MediaType::CustomManifest => "cm",
            MediaType::Imgur => "im",
            MediaType::Other(code) => code,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn is_type_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_lowercase())
}

impl FromStr for MediaType {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_type_code(s) {
            return Err(MediaError::unknown_type(s));
        }
        Ok(MediaType::from_code(s))
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.code().to_string()
    }
}

impl TryFrom<String> for MediaType {
    type Error = MediaError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// A `(type, id)` pair identifying one embeddable media item.
///
/// For `sc`, `hl`, `fi`, `cm` and `rt` the id is a full locator rather than
/// a short identifier. The type alone decides how the id is read.
///
/// Deserializing rejects an empty id, as [`FromStr`] does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ReferenceFields")]
pub struct MediaReference {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub id: String,
}

impl MediaReference {
    pub fn new(media_type: MediaType, id: impl Into<String>) -> Self {
        Self {
            media_type,
            id: id.into(),
        }
    }
}

#[derive(Deserialize)]
struct ReferenceFields {
    #[serde(rename = "type")]
    media_type: MediaType,
    id: String,
}

impl TryFrom<ReferenceFields> for MediaReference {
    type Error = MediaError;

    fn try_from(fields: ReferenceFields) -> Result<Self, Self::Error> {
        if fields.id.is_empty() {
            return Err(MediaError::invalid_reference(format!("{}:", fields.media_type)));
        }
        Ok(MediaReference::new(fields.media_type, fields.id))
    }
}

/// Writes the shorthand `type:id` form.
impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.media_type, self.id)
    }
}

/// Parses the shorthand `type:id` form literally, without classification.
///
/// Use [`crate::classify`] for user input; this is for values that are
/// already known to be stored references.
impl FromStr for MediaReference {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, id) = s
            .split_once(':')
            .ok_or_else(|| MediaError::invalid_reference(s))?;
        if id.is_empty() {
            return Err(MediaError::invalid_reference(s));
        }
        let media_type = code
            .parse()
            .map_err(|_| MediaError::invalid_reference(s))?;
        Ok(MediaReference::new(media_type, id))
    }
}

/// The outcome of classifying a dynamically typed input value.
///
/// A non-text input and a text input that matched nothing are different
/// outcomes and serialize differently: `NotText` becomes the
/// `{"type": null, "id": null}` sentinel while `NoMatch` becomes `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched(MediaReference),
    NotText,
    NoMatch,
}

impl Classification {
    /// Returns the reference if the input matched.
    pub fn reference(&self) -> Option<&MediaReference> {
        match self {
            Classification::Matched(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}

impl From<Option<MediaReference>> for Classification {
    fn from(reference: Option<MediaReference>) -> Self {
        match reference {
            Some(reference) => Classification::Matched(reference),
            None => Classification::NoMatch,
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Classification::Matched(reference) => reference.serialize(serializer),
            Classification::NotText => {
                let mut sentinel = serializer.serialize_struct("MediaReference", 2)?;
                sentinel.serialize_field("type", &None::<&str>)?;
                sentinel.serialize_field("id", &None::<&str>)?;
                sentinel.end()
            }
            Classification::NoMatch => serializer.serialize_none(),
        }
    }
}
