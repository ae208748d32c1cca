// ABOUTME: Timecode conversion for media durations and seek positions.
// ABOUTME: Parses [H:]M:SS into seconds and formats seconds as D:HH:MM:SS or 1h02m03s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MediaError;

static TIMECODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+:)?([0-9]{1,2}:)([0-9]{2})$").unwrap());

/// Converts a `[H:]M:SS` timecode to seconds.
/// Minutes take one or two digits, seconds exactly two. Returns None otherwise.
pub fn timecode_to_secs(timecode: &str) -> Option<u64> {
    let caps = TIMECODE_RE.captures(timecode)?;
    let field = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().trim_end_matches(':').parse().ok(),
            None => Some(0),
        }
    };

    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)
}

/// Parses user input that is either plain seconds or a `[H:]M:SS` timecode.
pub fn parse_seconds(s: &str) -> Result<u64, MediaError> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }
    timecode_to_secs(s).ok_or_else(|| MediaError::invalid_timecode(s))
}

/// Formats seconds as a timecode.
///
/// Colon form: `M:SS`, `H:MM:SS` or `D:HH:MM:SS`. Letter form drops zero
/// components (`1h01m01s`, `5m`, `0s`). Seconds are always two digits;
/// minutes and hours are padded only when a larger unit precedes them.
pub fn secs_to_time(secs: u64, letters: bool) -> String {
    let days = secs / (3600 * 24);
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    let hours_str = if hours < 10 && days > 0 {
        format!("0{}", hours)
    } else {
        hours.to_string()
    };
    let minutes_str = if minutes < 10 && (hours > 0 || days > 0) {
        format!("0{}", minutes)
    } else {
        minutes.to_string()
    };
    let seconds_str = format!("{:02}", seconds);

    let mut time = String::new();
    if letters {
        if days != 0 {
            time.push_str(&format!("{}d", days));
        }
        if hours != 0 {
            time.push_str(&format!("{}h", hours_str));
        }
        if minutes != 0 {
            time.push_str(&format!("{}m", minutes_str));
        }
        if seconds != 0 {
            time.push_str(&format!("{}s", seconds_str));
        }
        if time.is_empty() {
            return "0s".to_string();
        }
    } else {
        if days != 0 {
            time.push_str(&format!("{}:{}:", days, hours_str));
        } else if hours != 0 {
            time.push_str(&format!("{}:", hours_str));
        }
        time.push_str(&format!("{}:{}", minutes_str, seconds_str));
    }
    time
}
