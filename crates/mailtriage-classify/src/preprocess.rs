//! Text normalization and redaction using regex patterns.
//!
//! `normalize` is pure and idempotent: running it over an already-normalized
//! string returns the string unchanged.

use mailtriage_core::config::MAX_INPUT_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement token for redacted email addresses.
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";
/// Replacement token for redacted phone numbers.
pub const PHONE_PLACEHOLDER: &str = "[PHONE]";

// Compiled regex patterns (compiled once, reused).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10,11}\b").unwrap());
// Word characters, whitespace, sentence punctuation and the redaction
// placeholder brackets survive; everything else becomes a space.
static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.!?\[\]-]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw message text.
///
/// Redacts email addresses and 10-11 digit phone numbers, replaces noisy
/// characters with spaces, collapses whitespace runs, trims the ends, and
/// silently truncates to [`MAX_INPUT_CHARS`] characters.
///
/// Redaction runs before character stripping; stripping first would remove
/// the `@` and no email could ever match.
pub fn normalize(text: &str) -> String {
    let text = EMAIL_RE.replace_all(text, EMAIL_PLACEHOLDER);
    let text = PHONE_RE.replace_all(&text, PHONE_PLACEHOLDER);
    let text = STRIP_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(text.trim(), " ");
    truncate_chars(&text, MAX_INPUT_CHARS)
}

/// Truncate to at most `max` characters, trimming any whitespace the cut
/// leaves at the end.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    truncated.trim_end().to_string()
}
