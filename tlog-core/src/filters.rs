//! Named predicates used to select entries out of a [`LogSet`](crate::LogSet).
//!
//! A [`Filter`] is built once from a [`Predicate`] and its string arguments.
//! Arity is checked at construction. Argument values that can't be parsed
//! (a bad date, week 54...) put the filter in a closed state where it matches
//! nothing, instead of failing the whole filtering pass.

use crate::entry::LogEntry;
use crate::error::FilterError;
use crate::parse_entries::DATE_FORMAT;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

// chrono's `%m` and `%d` also take one digit, so the shape is checked first.
static DAY_ARG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("day regex is valid"));
static MONTH_ARG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("month regex is valid"));

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString, IntoStaticStr,
)]
pub enum Predicate {
    /// `[tag]`: exact tag equality.
    HasTag,
    /// `[YYYY-MM-DD]`: same calendar day.
    HasDay,
    /// `[year, week]`: same ISO-8601 week.
    HasWeek,
    /// `[YYYY-MM]`: same month number. The year is not compared.
    HasMonth,
    /// `[YYYY]`: same calendar year.
    HasYear,
    /// `[substring]`: case-insensitive substring of the entry text.
    Contains,
}

impl Predicate {
    /// Number of arguments the predicate expects.
    pub fn arity(self) -> usize {
        match self {
            Predicate::HasWeek => 2,
            _ => 1,
        }
    }

    fn names() -> String {
        Predicate::iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A predicate with its arguments already validated and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    HasTag(String),
    HasDay(NaiveDate),
    HasWeek { year: i32, week: u32 },
    HasMonth(u32),
    HasYear(i32),
    /// Stored lowercased.
    Contains(String),
    /// Arguments didn't parse. Matches no entry.
    Closed { predicate: Predicate, args: Vec<String> },
}

impl Filter {
    /// Builds a filter from a predicate and its raw arguments.
    ///
    /// Returns an error only when the number of arguments is wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tlog_core::filters::{Filter, Predicate};
    /// let week = Filter::new(Predicate::HasWeek, &["2021", "1"]).unwrap();
    /// assert_eq!(week, Filter::HasWeek { year: 2021, week: 1 });
    ///
    /// assert!(Filter::new(Predicate::HasWeek, &["2021"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(predicate: Predicate, args: &[S]) -> Result<Self, FilterError> {
        if args.len() != predicate.arity() {
            return Err(FilterError::Arity {
                predicate: predicate.into(),
                expected: predicate.arity(),
                got: args.len(),
            });
        }
        let first = args[0].as_ref();

        let parsed = match predicate {
            Predicate::HasTag => Some(Filter::HasTag(first.to_string())),
            Predicate::HasDay => Some(first)
                .filter(|arg| DAY_ARG_RE.is_match(arg))
                .and_then(|arg| NaiveDate::parse_from_str(arg, DATE_FORMAT).ok())
                .map(Filter::HasDay),
            Predicate::HasWeek => {
                let year = first.trim().parse::<i32>().ok();
                let week = args[1]
                    .as_ref()
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|w| (1..=53).contains(w));
                year.zip(week)
                    .map(|(year, week)| Filter::HasWeek { year, week })
            }
            Predicate::HasMonth => Some(first)
                .filter(|arg| MONTH_ARG_RE.is_match(arg))
                .and_then(|arg| NaiveDate::parse_from_str(&format!("{arg}-01"), DATE_FORMAT).ok())
                .map(|d| Filter::HasMonth(d.month())),
            Predicate::HasYear => first.trim().parse::<i32>().ok().map(Filter::HasYear),
            Predicate::Contains => Some(Filter::Contains(first.to_lowercase())),
        };

        Ok(parsed.unwrap_or_else(|| {
            let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
            tracing::warn!(
                predicate = predicate.as_ref(),
                ?args,
                "unparsable filter arguments, no entry will match"
            );
            Filter::Closed { predicate, args }
        }))
    }

    /// Like [`Filter::new`], resolving the predicate from its name (e.g. `"HasTag"`).
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self, FilterError> {
        let predicate =
            Predicate::from_str(name).map_err(|_| FilterError::UnknownPredicate {
                name: name.to_string(),
                expected: Predicate::names(),
            })?;
        Self::new(predicate, args)
    }

    pub fn predicate(&self) -> Predicate {
        match self {
            Filter::HasTag(_) => Predicate::HasTag,
            Filter::HasDay(_) => Predicate::HasDay,
            Filter::HasWeek { .. } => Predicate::HasWeek,
            Filter::HasMonth(_) => Predicate::HasMonth,
            Filter::HasYear(_) => Predicate::HasYear,
            Filter::Contains(_) => Predicate::Contains,
            Filter::Closed { predicate, .. } => *predicate,
        }
    }

    /// `true` when the arguments didn't parse and the filter matches nothing.
    pub fn is_closed(&self) -> bool {
        matches!(self, Filter::Closed { .. })
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        match self {
            Filter::HasTag(tag) => entry.tag() == tag.as_str(),
            Filter::HasDay(day) => entry.date() == *day,
            Filter::HasWeek { year, week } => {
                let iso = entry.date().iso_week();
                iso.year() == *year && iso.week() == *week
            }
            // FIXME: compares the month only, so 2020-03 entries match "2021-03".
            Filter::HasMonth(month) => entry.date().month() == *month,
            Filter::HasYear(year) => entry.date().year() == *year,
            Filter::Contains(needle) => entry
                .text()
                .map(|text| text.to_lowercase().contains(needle.as_str()))
                .unwrap_or(false),
            Filter::Closed { .. } => false,
        }
    }
}
