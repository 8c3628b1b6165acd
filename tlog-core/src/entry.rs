use chrono::NaiveDate;
use serde::Serialize;

/// One line of a time log: `2021-01-04  2H  research  reading papers`.
///
/// Entries are only built by [`parse_line`](crate::parse_entries::parse_line),
/// so every value in the system has a real date, a lowercase tag and
/// whole-hour duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogEntry {
    pub(crate) date: NaiveDate,
    pub(crate) duration: u32,
    pub(crate) tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<String>,
}

impl LogEntry {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hours spent.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Free-form description, `None` when the line stopped after the tag.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
