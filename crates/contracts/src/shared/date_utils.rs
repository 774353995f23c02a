/// Utilities for date and time parsing and formatting
///
/// Record dates arrive as ISO strings: "2024-03-15", "2024-03-15T14:02:26",
/// "2024-03-15T14:02:26.123Z" or with an explicit offset. Anything that does
/// not parse is reported as `None` and never panics.
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parse a date-only string (ISO or DD.MM.YYYY).
/// Example: "2024-03-15" or "15.03.2024" -> 2024-03-15
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Parse an ISO date or datetime string into a wall-clock timestamp.
///
/// Values with an offset keep their local wall-clock time, so
/// "2024-03-15T23:30:00+07:00" stays on the 15th.
/// Date-only values are placed at the start of the day.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| parse_date(value).map(start_of_day))
}

/// Parse an ISO date or datetime string into a comparable instant.
///
/// Values with an offset are converted to UTC, so
/// "2024-03-15T10:00:00+07:00" comes before "2024-03-15T05:00:00Z".
/// Values without an offset are taken as they are.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    parse_datetime(value)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of the day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| start_of_day(date))
}

/// First and last day of the month containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month_start = today.with_day(1).unwrap_or(today);
    let next_month_start = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let month_end = next_month_start
        .map(|d| d - Duration::days(1))
        .unwrap_or(today);
    (month_start, month_end)
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_date(" 15.03.2024 "), Some(date(2024, 3, 15)));
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = date(2024, 3, 15).and_hms_opt(14, 2, 26).unwrap();
        assert_eq!(parse_datetime("2024-03-15T14:02:26"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15 14:02:26"), Some(expected));
        assert_eq!(
            parse_datetime("2024-03-15T14:02:26.123Z").map(|d| d.date()),
            Some(date(2024, 3, 15))
        );
        assert_eq!(parse_datetime("2024-03-15"), Some(start_of_day(date(2024, 3, 15))));
    }

    #[test]
    fn test_offset_keeps_local_day() {
        let parsed = parse_datetime("2024-03-15T23:30:00+07:00").unwrap();
        assert_eq!(parsed.date(), date(2024, 3, 15));
    }

    #[test]
    fn test_timestamp_applies_offset() {
        let bangkok = parse_timestamp("2024-03-15T10:00:00+07:00").unwrap();
        assert_eq!(bangkok, date(2024, 3, 15).and_hms_opt(3, 0, 0).unwrap());
        assert!(bangkok < parse_timestamp("2024-03-15T05:00:00Z").unwrap());
        assert_eq!(parse_timestamp("2024-03-15"), parse_datetime("2024-03-15"));
        assert_eq!(parse_timestamp("invalid"), None);
    }

    #[test]
    fn test_invalid_datetime() {
        assert_eq!(parse_datetime("invalid"), None);
        assert_eq!(parse_datetime("   "), None);
        assert_eq!(parse_datetime("2024-13-01"), None);
    }

    #[test]
    fn test_day_bounds() {
        let d = date(2024, 1, 5);
        assert!(start_of_day(d) < end_of_day(d));
        assert_eq!(end_of_day(d).date(), d);
        assert_eq!(end_of_day(d) + Duration::nanoseconds(1), start_of_day(date(2024, 1, 6)));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(date(2024, 2, 14)), (date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(month_bounds(date(2024, 12, 31)), (date(2024, 12, 1), date(2024, 12, 31)));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
