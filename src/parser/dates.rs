use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::text::clean_text;

/// Accepted input formats, tried in order.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

static MONTH_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]+ \d{1,2}, \d{4})\b").unwrap());
static SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{4})\b").unwrap());
static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").unwrap());

/// Normalize a raw date string to ISO `YYYY-MM-DD`. Unrecognized input comes
/// back whitespace-normalized but otherwise unchanged; callers must not assume
/// the result is machine-parseable.
pub fn to_iso_date(raw: &str) -> String {
    let cleaned = clean_text(raw);
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    cleaned
}

/// First recognizable date token in a free-text span, canonicalized.
/// Month-name dates win over slash dates, which win over ISO dates,
/// regardless of position in the span. Later tokens are ignored.
pub fn first_date_token(s: &str) -> Option<String> {
    let cleaned = clean_text(s);
    if let Some(caps) = MONTH_NAME_RE.captures(&cleaned) {
        return Some(to_iso_date(&caps[1]));
    }
    if let Some(caps) = SLASH_RE.captures(&cleaned) {
        return Some(to_iso_date(&caps[1]));
    }
    if let Some(caps) = ISO_RE.captures(&cleaned) {
        return Some(caps[1].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_format() {
        assert_eq!(to_iso_date("08/01/2025"), "2025-08-01");
        assert_eq!(to_iso_date("8/1/2025"), "2025-08-01");
    }

    #[test]
    fn full_month_name() {
        assert_eq!(to_iso_date("August 1, 2025"), "2025-08-01");
    }

    #[test]
    fn abbreviated_month_name() {
        assert_eq!(to_iso_date("Aug 1, 2025"), "2025-08-01");
        assert_eq!(to_iso_date("Mar 28, 2025"), "2025-03-28");
    }

    #[test]
    fn iso_passes_through_parsed() {
        assert_eq!(to_iso_date("2025-08-01"), "2025-08-01");
    }

    #[test]
    fn unrecognized_returns_cleaned_input() {
        assert_eq!(to_iso_date("TBD  pending review"), "TBD pending review");
        assert_eq!(to_iso_date("01-08-2025"), "01-08-2025");
    }

    #[test]
    fn token_from_prose() {
        let s = "Closing on or about August 1, 2025 at 5:00 PM Eastern";
        assert_eq!(first_date_token(s).as_deref(), Some("2025-08-01"));
    }

    #[test]
    fn month_name_beats_earlier_slash_date() {
        let s = "Posted 03/01/2025, closes August 1, 2025";
        assert_eq!(first_date_token(s).as_deref(), Some("2025-08-01"));
    }

    #[test]
    fn slash_token() {
        assert_eq!(first_date_token("due by 12/31/2025, no exceptions").as_deref(), Some("2025-12-31"));
    }

    #[test]
    fn iso_token_verbatim() {
        assert_eq!(first_date_token("archived 2025-09-01 after close").as_deref(), Some("2025-09-01"));
    }

    #[test]
    fn first_of_multiple_dates() {
        let s = "open 05/01/2025 through 08/01/2025";
        assert_eq!(first_date_token(s).as_deref(), Some("2025-05-01"));
    }

    #[test]
    fn no_date_is_absent() {
        assert_eq!(first_date_token("rolling deadline"), None);
        assert_eq!(first_date_token(""), None);
    }
}
