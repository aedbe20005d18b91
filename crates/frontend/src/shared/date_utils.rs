/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Текущая локальная дата; страницы передают её в фильтры явно
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Example: 2024-03-15 -> "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024 14:02"
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime
        .with_timezone(&Local)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses `<input type="date">` value; empty or malformed input gives `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "Today", "Yesterday", "N days ago" or the formatted date for older records
pub fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n @ 2..=6 => format!("{} days ago", n),
        _ => format_date(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 15)), "Mar 15, 2024");
        assert_eq!(format_date(date(2024, 1, 5)), "Jan 5, 2024");
    }

    #[test]
    fn test_date_input_values() {
        assert_eq!(to_input_value(Some(date(2024, 2, 1))), "2024-02-01");
        assert_eq!(to_input_value(None), "");
        assert_eq!(parse_input_date("2024-02-01"), Some(date(2024, 2, 1)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("01.02.2024"), None);
    }

    #[test]
    fn test_relative_day() {
        let today = date(2024, 1, 20);
        assert_eq!(relative_day(today, today), "Today");
        assert_eq!(relative_day(date(2024, 1, 19), today), "Yesterday");
        assert_eq!(relative_day(date(2024, 1, 17), today), "3 days ago");
        assert_eq!(relative_day(date(2024, 1, 1), today), "Jan 1, 2024");
    }
}
