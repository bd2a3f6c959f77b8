//! Date formatting for rendered documents.
//!
//! Form data carries dates as free strings in several historical encodings.
//! Every formatter here is total: unparseable or missing input renders as the
//! empty string, never as an error and never as the raw input echoed back.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Label used for an open-ended range end when the entry is flagged ongoing.
pub const PRESENT_LABEL: &str = "Present";

/// Output style, chosen per template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePattern {
    /// `Jan 2022`
    MonthYear,
    /// `12 Jan 2022`
    DayMonthYear,
}

impl DatePattern {
    fn chrono_format(self) -> &'static str {
        match self {
            DatePattern::MonthYear => "%b %Y",
            DatePattern::DayMonthYear => "%-d %b %Y",
        }
    }
}

/// Accepted input encodings, probed in order. `%Y-%m` and bare `%Y` are
/// handled separately because chrono refuses to parse a date without a day.
const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

fn parse_naive(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.naive_utc().date());
    }
    // Month precision: anchor to the first of the month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    // Year precision: anchor to January 1st.
    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = value.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// Formats one raw date string. Returns `""` for absent or unparseable input.
pub fn format_date(value: Option<&str>, pattern: DatePattern) -> String {
    value
        .and_then(parse_naive)
        .map(|date| date.format(pattern.chrono_format()).to_string())
        .unwrap_or_default()
}

/// Formats a `start – end` range for one resume entry.
///
/// The ongoing flag is consulted before any end-date formatting: a flagged
/// entry always reads `Present` on the right side, even when a stale end date
/// is still stored. Sides that format to `""` drop out of the joined text.
pub fn format_range(
    start: Option<&str>,
    end: Option<&str>,
    present: bool,
    pattern: DatePattern,
) -> String {
    let start_text = format_date(start, pattern);
    let end_text = if present {
        PRESENT_LABEL.to_string()
    } else {
        format_date(end, pattern)
    };
    match (start_text.is_empty(), end_text.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start_text,
        (true, false) => end_text,
        (false, false) => format!("{start_text} - {end_text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_month_year() {
        assert_eq!(
            format_date(Some("2022-01-15"), DatePattern::MonthYear),
            "Jan 2022"
        );
    }

    #[test]
    fn test_iso_date_day_month_year() {
        assert_eq!(
            format_date(Some("2022-01-12"), DatePattern::DayMonthYear),
            "12 Jan 2022",
            "day must render unpadded"
        );
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            format_date(Some("2021-06-01T09:30:00Z"), DatePattern::MonthYear),
            "Jun 2021"
        );
    }

    #[test]
    fn test_year_month_precision() {
        assert_eq!(
            format_date(Some("2023-09"), DatePattern::MonthYear),
            "Sep 2023"
        );
        assert_eq!(
            format_date(Some("2023-09"), DatePattern::DayMonthYear),
            "1 Sep 2023",
            "month precision anchors to the first"
        );
    }

    #[test]
    fn test_us_slash_format() {
        assert_eq!(
            format_date(Some("03/14/2020"), DatePattern::MonthYear),
            "Mar 2020"
        );
    }

    #[test]
    fn test_bare_year() {
        assert_eq!(format_date(Some("2019"), DatePattern::MonthYear), "Jan 2019");
    }

    #[test]
    fn test_totality_over_garbage() {
        for raw in ["next tuesday", "2022-13-40", "20.1.2022", "", "   ", "20x2"] {
            assert_eq!(
                format_date(Some(raw), DatePattern::MonthYear),
                "",
                "unparseable input {raw:?} must format to empty, never echo"
            );
        }
        assert_eq!(format_date(None, DatePattern::MonthYear), "");
    }

    #[test]
    fn test_range_joins_both_sides() {
        assert_eq!(
            format_range(
                Some("2020-01-01"),
                Some("2022-06-01"),
                false,
                DatePattern::MonthYear
            ),
            "Jan 2020 - Jun 2022"
        );
    }

    #[test]
    fn test_present_overrides_stored_end_date() {
        assert_eq!(
            format_range(
                Some("2020-01-01"),
                Some("2022-06-01"),
                true,
                DatePattern::MonthYear
            ),
            "Jan 2020 - Present",
            "the ongoing flag wins over any stored end date"
        );
    }

    #[test]
    fn test_range_with_missing_sides() {
        assert_eq!(
            format_range(None, Some("2022-06-01"), false, DatePattern::MonthYear),
            "Jun 2022"
        );
        assert_eq!(
            format_range(Some("bad input"), None, true, DatePattern::MonthYear),
            "Present",
            "an ongoing entry with no usable start still reads Present"
        );
        assert_eq!(format_range(None, None, false, DatePattern::MonthYear), "");
    }
}
