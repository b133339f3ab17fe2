/// Utilities for date and time formatting
///
/// Display formatting for gateway timestamps; unparseable date strings
/// fall back to the raw value rather than erroring.
use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp as DD.MM.YYYY HH:MM.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d.%m.%Y %H:%M").to_string()
}

/// Format an ISO date string to DD.MM.YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15.03.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Hourly rate display: "£18.50/h", or a dash when the rate is unset.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("\u{a3}{:.2}/h", rate),
        None => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let at = DateTime::parse_from_rfc3339("2025-03-15T14:02:26.123Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(at), "15.03.2025 14:02");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15.03.2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(18.5)), "\u{a3}18.50/h");
        assert_eq!(format_rate(None), "\u{2014}");
    }
}
