use chrono::{DateTime, Local};

pub(super) fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

pub(super) fn format_date(dt: &DateTime<Local>) -> String {
    dt.format("%Y%m%d").to_string()
}

pub(super) fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Local.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt), "20240601T143000");
    }

    #[test]
    fn test_format_date() {
        let dt = Local.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap();
        assert_eq!(format_date(&dt), "20240601");
    }

    #[test]
    fn test_escape_text() {
        let text = "Line1\nLine2,with,commas;and;semicolons\\backslash";
        let escaped = escape_text(text);
        assert!(escaped.contains("\\n"));
        assert!(escaped.contains("\\,"));
        assert!(escaped.contains("\\;"));
        assert!(escaped.contains("\\\\"));
    }
}
