use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::present;

/// Date layouts seen in the export, tried in order.
///
/// Day-first is tried before month-first, so `03/04/2020` reads as 3 April.
pub const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%m/%d/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// Layout of the `Timestamp` column written by Google Forms.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// chrono accepts short years for `%Y`; two-digit years are not guessed.
const MIN_YEAR: i32 = 1000;

/// Parse a free-form date answer. Renders as `YYYY-MM-DD` via `Display`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let s = present(value)?;
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(s, fmt)
            .ok()
            .filter(|d| d.year() >= MIN_YEAR)
    })
}

/// Parse a form submission timestamp. No fallback layouts.
pub fn parse_timestamp(value: Option<&str>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value?.trim(), TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<String> {
        parse_date(Some(s)).map(|d| d.to_string())
    }

    #[test]
    fn test_day_first_priority() {
        assert_eq!(date("15/03/2021").as_deref(), Some("2021-03-15"));
        assert_eq!(date("03/04/2020").as_deref(), Some("2020-04-03"));
    }

    #[test]
    fn test_month_first_fallback() {
        // 13 cannot be a month, so the month/day/year layout wins
        assert_eq!(date("12/13/2019").as_deref(), Some("2019-12-13"));
    }

    #[test]
    fn test_other_layouts() {
        assert_eq!(date("2021-03-15").as_deref(), Some("2021-03-15"));
        assert_eq!(date("15-03-2021").as_deref(), Some("2021-03-15"));
        assert_eq!(date("2021/03/15").as_deref(), Some("2021-03-15"));
        assert_eq!(date("  7/9/1995 ").as_deref(), Some("1995-09-07"));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_date(None), None);
        assert_eq!(date(""), None);
        assert_eq!(date("-"), None);
        assert_eq!(date("not a date"), None);
        assert_eq!(date("31/02/2020"), None);
        assert_eq!(date("March 5th"), None);
        assert_eq!(date("5/3/21"), None);
    }

    #[test]
    fn test_timestamp() {
        let ts = parse_timestamp(Some("01/02/2020 13:45:00")).unwrap();
        assert_eq!(ts.to_string(), "2020-02-01 13:45:00");
    }

    #[test]
    fn test_timestamp_requires_time() {
        assert_eq!(parse_timestamp(Some("01/02/2020")), None);
        assert_eq!(parse_timestamp(Some("2020-02-01 13:45:00")), None);
        assert_eq!(parse_timestamp(Some("")), None);
        assert_eq!(parse_timestamp(None), None);
    }
}
