//! Nepali display formatting for numbers, reading time and timestamps

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::error::{HeroError, Result};

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

const NEPALI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फेब्रुअरी",
    "मार्च",
    "अप्रिल",
    "मे",
    "जुन",
    "जुलाई",
    "अगस्ट",
    "सेप्टेम्बर",
    "अक्टोबर",
    "नोभेम्बर",
    "डिसेम्बर",
];

const MINUTE_LABEL: &str = "मिनेट";

/// Timestamp layouts without an offset, tried in order. Values are UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Replace ASCII digits with Devanagari digits
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => DEVANAGARI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Localize a reading time such as `"5 min read"` to `"५ मिनेट"`.
///
/// Text that is already localized is returned as is.
pub fn format_reading_time(text: &str) -> String {
    let mut words = Vec::new();
    for token in text.split_whitespace() {
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (number, rest) = token.split_at(split);

        if !number.is_empty() {
            words.push(to_devanagari_digits(number));
        }
        match rest.to_lowercase().as_str() {
            "" | "read" => {}
            "min" | "mins" | "minute" | "minutes" => words.push(MINUTE_LABEL.to_string()),
            _ => words.push(rest.to_string()),
        }
    }
    words.join(" ")
}

/// Format an update timestamp as a Nepali date, e.g. `"जनवरी १, २०२५"`.
///
/// Timestamps carrying a time of day are shifted to `offset` and get an
/// `HH:MM` suffix. Plain dates are shown as given.
pub fn format_updated_at(text: &str, offset: FixedOffset) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(String::new());
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(format_date_time(stamp.with_timezone(&offset).naive_local()));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            let stamp = offset.from_utc_datetime(&naive);
            return Ok(format_date_time(stamp.naive_local()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(format_date(date));
    }

    Err(HeroError::InvalidTimestamp(text.to_string()))
}

fn format_date<D: Datelike>(date: D) -> String {
    let month = NEPALI_MONTHS[date.month0() as usize];
    to_devanagari_digits(&format!("{} {}, {}", month, date.day(), date.year()))
}

fn format_date_time(stamp: NaiveDateTime) -> String {
    let time = format!("{:02}:{:02}", stamp.hour(), stamp.minute());
    format!("{}, {}", format_date(stamp), to_devanagari_digits(&time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nepal_time() -> FixedOffset {
        FixedOffset::east_opt(345 * 60).unwrap()
    }

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(to_devanagari_digits("2025-01-09"), "२०२५-०१-०९");
        assert_eq!(to_devanagari_digits("abc"), "abc");
        assert_eq!(to_devanagari_digits("५ मिनेट"), "५ मिनेट");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(format_reading_time("5 min read"), "५ मिनेट");
        assert_eq!(format_reading_time("12 Minutes"), "१२ मिनेट");
        assert_eq!(format_reading_time("3min"), "३ मिनेट");
        assert_eq!(format_reading_time("५ मिनेट"), "५ मिनेट");
        assert_eq!(format_reading_time("   "), "");
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(
            format_updated_at("2025-01-01", nepal_time()).unwrap(),
            "जनवरी १, २०२५"
        );
    }

    #[test]
    fn test_rfc3339_is_shifted_to_display_offset() {
        // 18:30 UTC is 00:15 the next day in Nepal
        assert_eq!(
            format_updated_at("2024-12-31T18:30:00Z", nepal_time()).unwrap(),
            "जनवरी १, २०२५, ००:१५"
        );
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        assert_eq!(
            format_updated_at("2025-03-10T04:15:00.000", nepal_time()).unwrap(),
            "मार्च १०, २०२५, १०:००"
        );
    }

    #[test]
    fn test_empty_and_invalid_timestamps() {
        assert_eq!(format_updated_at("", nepal_time()).unwrap(), "");
        assert_eq!(
            format_updated_at("yesterday", nepal_time()),
            Err(HeroError::InvalidTimestamp("yesterday".to_string()))
        );
    }
}
