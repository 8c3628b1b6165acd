//! Parses a single time log line into a [`LogEntry`].
//!
//! Line syntax:
//!   YYYY-MM-DD   <dur>H  <tag>  <text>
//!
//! `<tag>` is made of lowercase letters and dots, `<text>` is optional and runs
//! to the end of the line. Separators are one or more spaces.

use crate::entry::LogEntry;
use crate::error::{ParseError, ParseErrorKind};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Date format of the first token, also used for `HasDay` arguments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}-[01][0-9]-[0-3][0-9]) +([0-9]+)H +([.a-z]+)(?:$| +(.*))$")
        .expect("line regex is valid")
});

/// Parses one raw line.
///
/// The whole line must match; nothing is returned for a partial match. After
/// the pattern matches, the date is checked against the calendar and the
/// duration must fit in a `u32`.
///
/// A trailing `\r` (CRLF files) is ignored. A text group made only of
/// trailing spaces counts as no text.
///
/// # Examples
///
/// ```
/// # use tlog_core::parse_entries::parse_line;
/// let entry = parse_line("2021-01-04  2H  research  reading papers").unwrap();
/// assert_eq!(entry.duration(), 2);
/// assert_eq!(entry.tag(), "research");
/// assert_eq!(entry.text(), Some("reading papers"));
///
/// assert!(parse_line("2021-01-04  2h  research").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let trimmed = line.strip_suffix('\r').unwrap_or(line);
    let error = |kind| ParseError {
        line: line.to_string(),
        kind,
    };

    let caps = LINE_RE
        .captures(trimmed)
        .ok_or_else(|| error(ParseErrorKind::Grammar))?;

    let date = NaiveDate::parse_from_str(&caps[1], DATE_FORMAT)
        .map_err(|_| error(ParseErrorKind::InvalidDate))?;
    let duration = caps[2]
        .parse::<u32>()
        .map_err(|_| error(ParseErrorKind::InvalidDuration))?;
    let text = caps
        .get(4)
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(LogEntry {
        date,
        duration,
        tag: caps[3].to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_line_with_text() {
        let entry = parse_line("2021-01-04  2H  research  reading papers").unwrap();
        assert_eq!(entry.date(), ymd(2021, 1, 4));
        assert_eq!(entry.duration(), 2);
        assert_eq!(entry.tag(), "research");
        assert_eq!(entry.text(), Some("reading papers"));
    }

    #[test]
    fn parse_line_without_text() {
        let entry = parse_line("2021-01-05  1H  admin").unwrap();
        assert_eq!(entry.date(), ymd(2021, 1, 5));
        assert_eq!(entry.duration(), 1);
        assert_eq!(entry.tag(), "admin");
        assert_eq!(entry.text(), None);
    }

    #[test]
    fn single_spaces_and_dotted_tags_are_accepted() {
        let entry = parse_line("2020-12-31 10H client.acme call with Bob: 2 topics").unwrap();
        assert_eq!(entry.duration(), 10);
        assert_eq!(entry.tag(), "client.acme");
        assert_eq!(entry.text(), Some("call with Bob: 2 topics"));
    }

    #[test]
    fn zero_hours_is_valid() {
        let entry = parse_line("2021-01-04 0H admin").unwrap();
        assert_eq!(entry.duration(), 0);
    }

    #[test]
    fn text_keeps_inner_spacing() {
        let entry = parse_line("2021-01-04 1H dev  fix   build ").unwrap();
        assert_eq!(entry.text(), Some("fix   build "));
    }

    #[test]
    fn trailing_spaces_after_tag_mean_no_text() {
        let entry = parse_line("2021-01-04 1H dev   ").unwrap();
        assert_eq!(entry.text(), None);
    }

    #[test]
    fn crlf_line_ending_is_ignored() {
        let entry = parse_line("2021-01-04 1H dev\r").unwrap();
        assert_eq!(entry.tag(), "dev");
        assert_eq!(entry.text(), None);

        let entry = parse_line("2021-01-04 1H dev notes\r").unwrap();
        assert_eq!(entry.text(), Some("notes"));
    }

    #[test]
    fn missing_h_suffix_fails() {
        let err = parse_line("2021-01-04  2  research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Grammar);
        assert_eq!(err.line, "2021-01-04  2  research");
    }

    #[test]
    fn lowercase_h_fails() {
        assert!(parse_line("2021-01-04 2h research").is_err());
    }

    #[test]
    fn non_numeric_duration_fails() {
        assert!(parse_line("2021-01-04  xH  research").is_err());
        assert!(parse_line("2021-01-04  1.5H  research").is_err());
        assert!(parse_line("2021-01-04  -1H  research").is_err());
    }

    #[test]
    fn uppercase_tag_fails() {
        let err = parse_line("2021-01-04  2H  Research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Grammar);
    }

    #[test]
    fn tag_with_digits_fails() {
        assert!(parse_line("2021-01-04 2H research2").is_err());
        assert!(parse_line("2021-01-04 2H re-search").is_err());
    }

    #[test]
    fn unparsable_date_fails_secondary_validation() {
        let err = parse_line("2021-02-30  2H  research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDate);

        let err = parse_line("2021-13-01  2H  research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDate);

        let err = parse_line("2021-21-01  2H  research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Grammar);
    }

    #[test]
    fn overflowing_duration_fails() {
        let err = parse_line("2021-01-04  99999999999H  research").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDuration);
    }

    #[test]
    fn pattern_must_anchor_the_whole_line() {
        assert!(parse_line(" 2021-01-04 2H research").is_err());
        assert!(parse_line("x2021-01-04 2H research").is_err());
        assert!(parse_line("2021-01-04 2H").is_err());
        assert!(parse_line("").is_err());
    }

    #[test]
    fn tab_separators_are_rejected() {
        assert!(parse_line("2021-01-04\t2H\tresearch").is_err());
    }
}
