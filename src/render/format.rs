use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Render a server timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Zoned timestamps are shifted into local time first; naive ones are shown
/// as sent. Strings that do not parse pass through unchanged so table rows
/// never disappear over one bad field.
pub fn format_datetime(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return zoned
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    trimmed.to_string()
}

/// Render just the calendar date of a server timestamp.
pub fn format_date(raw: &str) -> String {
    let full = format_datetime(raw);
    match full.get(..10) {
        Some(date) if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() => date.to_string(),
        _ => full,
    }
}

/// Validate a `YYYY-MM-DD` command-line date and echo it back normalized.
pub fn parse_date_arg(raw: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Render a size reported in megabytes, stepping up to gigabytes at 1024.
pub fn format_size(megabytes: f64) -> String {
    if megabytes >= 1024.0 {
        format!("{:.2} GB", megabytes / 1024.0)
    } else {
        format!("{megabytes:.0} MB")
    }
}

/// Shorten elapsed seconds for task-log rows.
pub fn format_seconds(seconds: f64) -> String {
    if seconds >= 60.0 {
        format!("{:.0}m{:02.0}s", (seconds / 60.0).floor(), seconds % 60.0)
    } else {
        format!("{seconds:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_timestamps_render_in_place() {
        assert_eq!(format_datetime("2024-05-01T12:30:05"), "2024-05-01 12:30:05");
        assert_eq!(
            format_datetime("2024-05-01T12:30:05.123456"),
            "2024-05-01 12:30:05"
        );
        assert_eq!(format_datetime("2024-05-01 12:30:05"), "2024-05-01 12:30:05");
    }

    #[test]
    fn unparsable_timestamps_pass_through() {
        assert_eq!(format_datetime("soon"), "soon");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn date_truncates_to_day() {
        assert_eq!(format_date("2024-05-01T12:30:05"), "2024-05-01");
        assert_eq!(format_date("n/a"), "n/a");
    }

    #[test]
    fn date_args_validate_shape() {
        assert_eq!(parse_date_arg("2024-02-29").unwrap(), "2024-02-29");
        assert!(parse_date_arg("2023-02-29").is_err());
        assert!(parse_date_arg("01/02/2024").is_err());
    }

    #[test]
    fn sizes_step_to_gigabytes() {
        assert_eq!(format_size(870.0), "870 MB");
        assert_eq!(format_size(1024.0), "1.00 GB");
        assert_eq!(format_size(2560.0), "2.50 GB");
    }

    #[test]
    fn seconds_wrap_to_minutes() {
        assert_eq!(format_seconds(4.25), "4.2s");
        assert_eq!(format_seconds(75.0), "1m15s");
    }
}
