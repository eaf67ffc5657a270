use super::present;

/// Clean a free-text answer for embedding in a SQL string literal.
///
/// Returns `None` for missing, blank or `-` answers; otherwise the trimmed text
/// with every `'` doubled.
pub fn clean_text(value: Option<&str>) -> Option<String> {
    present(value).map(|s| s.replace('\'', "''"))
}
