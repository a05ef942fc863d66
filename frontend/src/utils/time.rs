use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Milliseconds since the Unix epoch for a date, a naive datetime (read as
/// UTC) or an RFC 3339 timestamp.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    parse_datetime(value).map(|dt| dt.and_utc().timestamp_millis())
}

/// `HH:MM` or `HH:MM:SS` to seconds since midnight.
pub fn time_to_seconds(value: &str) -> Option<u32> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = match parts.next() {
        Some(raw) => raw.split('.').next()?.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// `2024-03-05` → `05 Mar 2024`. Unparsable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => value.to_string(),
    }
}

/// `13:05:00` → `13:05`.
pub fn format_time(value: &str) -> String {
    time_to_seconds(value)
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .map(|time| format!("{:02}:{:02}", time.hour(), time.minute()))
        .unwrap_or_else(|| value.to_string())
}

pub fn format_datetime(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        None => value.to_string(),
    }
}

pub fn format_optional_date(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| "-".into())
}

/// Value for an `<input type="date">`: the `YYYY-MM-DD` part of a stored
/// date or timestamp, empty when absent.
pub fn input_date(value: Option<&str>) -> String {
    value
        .and_then(parse_datetime)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Value for an `<input type="time">`.
pub fn input_time(value: Option<&str>) -> String {
    value.map(format_time).unwrap_or_default()
}

/// `HH:MM` from a time input to the `HH:MM:SS` the API stores.
pub fn wire_time(value: &str) -> Option<String> {
    let secs = time_to_seconds(value)?;
    Some(format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    ))
}

/// `YYYY-MM-DD` when the input is a valid calendar date.
pub fn wire_date(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .ok()
        .map(|date| date.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_inputs_and_wire_values() {
        assert_eq!(input_date(Some("2024-03-05T10:00:00.000Z")), "2024-03-05");
        assert_eq!(input_date(None), "");
        assert_eq!(input_time(Some("09:30:00")), "09:30");
        assert_eq!(wire_time("09:30").as_deref(), Some("09:30:00"));
        assert_eq!(wire_time("25:00"), None);
        assert_eq!(wire_date("2024-02-30"), None);
        assert_eq!(wire_date(" 2024-02-29 ").as_deref(), Some("2024-02-29"));
    }

    #[test]
    fn timestamps_from_all_supported_shapes() {
        let day = parse_timestamp("2024-01-02").unwrap();
        let naive = parse_timestamp("2024-01-02T06:00:00").unwrap();
        let spaced = parse_timestamp("2024-01-02 06:00:00").unwrap();
        let zoned = parse_timestamp("2024-01-02T13:00:00+07:00").unwrap();
        assert_eq!(naive - day, 6 * 3600 * 1000);
        assert_eq!(naive, spaced);
        assert_eq!(naive, zoned);
        assert_eq!(parse_timestamp("02/01/2024"), None);
    }

    #[test]
    fn time_of_day_parsing() {
        assert_eq!(time_to_seconds("00:00:00"), Some(0));
        assert_eq!(time_to_seconds("13:05"), Some(13 * 3600 + 5 * 60));
        assert_eq!(time_to_seconds("08:30:15.000"), Some(8 * 3600 + 30 * 60 + 15));
        assert_eq!(time_to_seconds("25:00:00"), None);
        assert_eq!(time_to_seconds("noon"), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05T10:00:00.000Z"), "05 Mar 2024");
        assert_eq!(format_time("13:05:00"), "13:05");
        assert_eq!(format_datetime("2024-03-05T10:07:00"), "05 Mar 2024, 10:07");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_optional_date(None), "-");
    }
}
