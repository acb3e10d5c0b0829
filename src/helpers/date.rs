//! Date helper functions

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a front-matter date in the formats people actually write
///
/// Dates without a time are placed at midnight. Returns `None` for anything
/// unrecognized; the original string is still what gets displayed.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    const DATETIME_FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Today's date as written into new front-matter
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date(" January 15, 2024 "), Some(expected));
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_date("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "10:30");
        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_today_shape() {
        assert!(parse_date(&today()).is_some());
    }
}
