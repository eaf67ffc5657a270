//! Best-effort parsing of individual form answers.
//!
//! - [`text`] — trimming, sentinel removal and quote escaping.
//! - [`boolean`] — affirmative-token whitelist.
//! - [`date`] — calendar dates and form submission timestamps.
//!
//! None of these ever fail: anything unusable degrades to `None` / `false`.

pub mod boolean;
pub mod date;
pub mod text;

/// Placeholder respondents type when a question does not apply.
pub const SENTINEL: &str = "-";

/// Trimmed value, or `None` when the input is missing, blank or the sentinel.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == SENTINEL {
        None
    } else {
        Some(trimmed)
    }
}
