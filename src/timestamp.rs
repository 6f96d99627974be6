//! Timestamp label recognition and conversion.
//!
//! Chapter markers are discovered as link labels such as `3:45` or
//! `1:02:03`. This module decides which labels qualify and converts them
//! to whole seconds from the start of the video.

use std::sync::LazyLock;

use regex::Regex;

/// `M:SS` or `H:MM:SS`, with the leading component one or two digits.
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?$").expect("timestamp regex should compile")
});

/// Seconds per minute.
const MINUTE: u64 = 60;

/// Seconds per hour.
const HOUR: u64 = 60 * MINUTE;

/// Whether `text` looks like a chapter timestamp label.
///
/// The caller is expected to trim the text first; surrounding whitespace
/// makes the label fail the test.
pub fn is_timestamp(text: &str) -> bool {
    TIMESTAMP_PATTERN.is_match(text)
}

/// Convert a colon-separated time string to whole seconds.
///
/// Components are interpreted from the right: one component is plain
/// seconds, two are `minutes:seconds`, three are `hours:minutes:seconds`.
/// Returns `None` for more than three components, for empty or non-digit
/// components, and when the value does not fit in a `u64`.
///
/// Unlike [`is_timestamp`], component widths are not checked here, so the
/// player's own time display (`0:07`, `12`, `1:2:3`) parses as well.
pub fn parse_seconds(text: &str) -> Option<u64> {
    let parts = text
        .split(':')
        .map(parse_component)
        .collect::<Option<Vec<u64>>>()?;

    match parts.as_slice() {
        [s] => Some(*s),
        [m, s] => m.checked_mul(MINUTE)?.checked_add(*s),
        [h, m, s] => h
            .checked_mul(HOUR)?
            .checked_add(m.checked_mul(MINUTE)?)?
            .checked_add(*s),
        _ => None,
    }
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Format whole seconds as `M:SS`, or `H:MM:SS` from one hour on.
pub fn format_seconds(total: u64) -> String {
    let hours = total / HOUR;
    let minutes = (total % HOUR) / MINUTE;
    let seconds = total % MINUTE;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
