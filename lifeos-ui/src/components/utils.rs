//! Utility functions for UI components

use crate::display_types::DEFAULT_NOTE_DATE_FORMAT;
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::warn;

/// Format a calendar date with a strftime pattern.
///
/// Patterns chrono cannot apply to a bare date (unknown specifiers, time
/// fields) fall back to [`DEFAULT_NOTE_DATE_FORMAT`].
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    warn!("Date format '{}' not usable for dates, using default", pattern);
    date.format(DEFAULT_NOTE_DATE_FORMAT).to_string()
}

/// Uppercase the first letter of every whitespace-separated word.
///
/// Display only; callers keep the original value.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
