use log::debug;

use crate::utils::constants::{TitlePattern, CONSTANTS};

fn apply_pattern(pattern: &TitlePattern, title: &str) -> Option<(String, String)> {
    let captures = pattern.regex.captures(title)?;
    let first = captures.get(1)?.as_str().trim().to_string();
    let second = captures.get(2)?.as_str().trim().to_string();
    Some(if pattern.reversed { (second, first) } else { (first, second) })
}

/// Splits a video title into `(artist, song)`.
///
/// The patterns are tried in order and the first one matching wins,
/// even when a later one would give a better split.
pub fn parse_title(title: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(title) = title else {
        return (None, None);
    };
    for pattern in &CONSTANTS.title_patterns {
        if let Some((artist, song)) = apply_pattern(pattern, title) {
            debug!("title {title:?} matched {}", pattern.name);
            return (Some(artist), Some(song));
        }
    }
    debug!("title {title:?} matched no pattern");
    (None, None)
}
