use chrono::{NaiveDate, NaiveDateTime};

use crate::field::text::clean_text;

/// A value about to be written into a SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    /// Untrusted text; goes through [`clean_text`] before quoting.
    Text(&'a str),
    /// Text already produced by [`clean_text`]; quoted as is.
    Clean(&'a str),
    /// Calendar date, loaded through the database's `safe_parse_date` function.
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl<'a> SqlValue<'a> {
    /// Cleaned optional text, `NULL` when absent.
    pub fn clean(value: Option<&'a str>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Clean)
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Date)
    }

    pub fn timestamp(value: Option<NaiveDateTime>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Timestamp)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Render a value as a SQL literal.
///
/// Every field written to an output file goes through here. Raw text that
/// cleans to nothing becomes `NULL`.
pub fn escape_sql_value(value: &SqlValue<'_>) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(true) => "TRUE".to_string(),
        SqlValue::Bool(false) => "FALSE".to_string(),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Text(raw) => match clean_text(Some(raw)) {
            Some(cleaned) => format!("'{cleaned}'"),
            None => "NULL".to_string(),
        },
        SqlValue::Clean(cleaned) => format!("'{cleaned}'"),
        SqlValue::Date(date) => format!("safe_parse_date('{}')", date.format("%Y-%m-%d")),
        SqlValue::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S")),
    }
}

/// `column = value`, or `column IS NULL` when the value is absent.
pub fn sql_equals(column: &str, value: &SqlValue<'_>) -> String {
    if value.is_null() {
        format!("{column} IS NULL")
    } else {
        format!("{column} = {}", escape_sql_value(value))
    }
}

/// Flatten text for use inside a `--` comment line.
pub fn sql_comment(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(escape_sql_value(&SqlValue::Null), "NULL");
        assert_eq!(escape_sql_value(&SqlValue::Bool(true)), "TRUE");
        assert_eq!(escape_sql_value(&SqlValue::Bool(false)), "FALSE");
        assert_eq!(escape_sql_value(&SqlValue::Int(3)), "3");
        assert_eq!(escape_sql_value(&SqlValue::Int(-12)), "-12");
    }

    #[test]
    fn test_raw_text_quotes_are_doubled() {
        assert_eq!(
            escape_sql_value(&SqlValue::Text(" O'Brien ")),
            "'O''Brien'"
        );
        let injected = escape_sql_value(&SqlValue::Text("x'); DROP TABLE members; --"));
        assert_eq!(injected, "'x''); DROP TABLE members; --'");
    }

    #[test]
    fn test_blank_raw_text_is_null() {
        assert_eq!(escape_sql_value(&SqlValue::Text("  ")), "NULL");
        assert_eq!(escape_sql_value(&SqlValue::Text("-")), "NULL");
    }

    #[test]
    fn test_cleaned_text_is_not_escaped_twice() {
        let cleaned = clean_text(Some("O'Brien")).unwrap();
        assert_eq!(escape_sql_value(&SqlValue::Clean(&cleaned)), "'O''Brien'");
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(
            escape_sql_value(&SqlValue::Date(d)),
            "safe_parse_date('2021-03-15')"
        );
        let ts = d.and_hms_opt(8, 5, 0).unwrap();
        assert_eq!(
            escape_sql_value(&SqlValue::Timestamp(ts)),
            "'2021-03-15 08:05:00'"
        );
        assert_eq!(escape_sql_value(&SqlValue::date(None)), "NULL");
    }

    #[test]
    fn test_sql_equals_null() {
        assert_eq!(sql_equals("email", &SqlValue::Null), "email IS NULL");
        assert_eq!(
            sql_equals("email", &SqlValue::Clean("a@b.org")),
            "email = 'a@b.org'"
        );
    }

    #[test]
    fn test_comment_is_single_line() {
        assert_eq!(
            sql_comment("Ada\nDROP TABLE members;\r\nx"),
            "Ada DROP TABLE members; x"
        );
    }
}
