//! The ordered record store built by importing log lines and files.

use crate::entry::LogEntry;
use crate::error::{ImportError, ParseError, ParseErrorKind};
use crate::filters::Filter;
use crate::parse_entries::parse_line;
use crate::tags::TagIndex;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Entries in import order. Duplicates are kept.
///
/// A set only grows by appending. Filtering and tag indexing build new values
/// and never touch the source set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogSet {
    entries: Vec<LogEntry>,
}

impl LogSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a whole file into a new set.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let mut set = Self::new();
        set.import_file(path)?;
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Parses `line` and appends the entry. On error the set is unchanged.
    pub fn import_line(&mut self, line: &str) -> Result<&LogEntry, ParseError> {
        let entry = parse_line(line)?;
        Ok(self.push(entry))
    }

    pub(crate) fn push(&mut self, entry: LogEntry) -> &LogEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Imports every line of `path`, in file order.
    ///
    /// The first line that doesn't parse stops the import, and the entries
    /// already read from this file are dropped again, so a broken file adds
    /// nothing to the set. Returns the number of entries added.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ImportError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening log file");
        let io_error = |source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let reader = BufReader::new(file);
        let start = self.entries.len();

        for (index, line) in reader.split(b'\n').enumerate() {
            let result = line.map_err(io_error).and_then(|bytes| {
                decode_line(bytes)
                    .and_then(|line| self.import_line(&line).map(|_| ()))
                    .map_err(|source| ImportError::Parse {
                        path: path.to_path_buf(),
                        line_number: index + 1,
                        source,
                    })
            });
            if let Err(err) = result {
                self.entries.truncate(start);
                return Err(err);
            }
        }

        let added = self.entries.len() - start;
        tracing::debug!(path = %path.display(), entries = added, "imported log file");
        Ok(added)
    }

    /// Appends every entry of `other`, keeping its order.
    pub fn append(&mut self, other: LogSet) {
        self.entries.extend(other.entries);
    }

    /// Returns the entries matching `filter`, in their current order.
    pub fn filter(&self, filter: &Filter) -> LogSet {
        self.iter().filter(|e| filter.matches(e)).cloned().collect()
    }

    /// Returns the entries matching every filter. An empty slice keeps everything.
    pub fn filter_all(&self, filters: &[Filter]) -> LogSet {
        self.iter()
            .filter(|e| filters.iter().all(|f| f.matches(e)))
            .cloned()
            .collect()
    }

    /// Groups the entries by tag. See [`TagIndex`].
    pub fn tags(&self) -> TagIndex {
        TagIndex::from_set(self)
    }

    /// Sum of all durations, in hours.
    pub fn total_duration(&self) -> u64 {
        self.iter().map(|e| u64::from(e.duration())).sum()
    }
}

/// Turns a raw line (without its `\n`) into text.
///
/// Invalid UTF-8 is a parse failure of that line. The error keeps a lossy
/// copy of the line so it can still be reported.
fn decode_line(bytes: Vec<u8>) -> Result<String, ParseError> {
    String::from_utf8(bytes).map_err(|err| {
        let bytes = err.into_bytes();
        let raw = bytes.strip_suffix(b"\r").unwrap_or(bytes.as_slice());
        ParseError {
            line: String::from_utf8_lossy(raw).into_owned(),
            kind: ParseErrorKind::InvalidUtf8,
        }
    })
}

impl FromIterator<LogEntry> for LogSet {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<LogEntry> for LogSet {
    fn extend<I: IntoIterator<Item = LogEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for LogSet {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogSet {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Predicate;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn import_line_appends_in_order() {
        let mut set = LogSet::new();
        set.import_line("2021-01-05 1H admin").unwrap();
        set.import_line("2021-01-04 2H research").unwrap();
        set.import_line("2021-01-05 1H admin").unwrap();
        assert_eq!(set.len(), 3);
        let tags: Vec<_> = set.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, ["admin", "research", "admin"]);
        assert_eq!(set.entries()[0], set.entries()[2]);
    }

    #[test]
    fn malformed_lines_leave_the_set_unchanged() {
        let mut set = LogSet::new();
        set.import_line("2021-01-04 2H research").unwrap();
        let before = set.clone();
        for line in [
            "2021-01-04 2 research",
            "2021-01-04 xH research",
            "2021-01-04 2H Research",
            "2021-02-31 2H research",
        ] {
            assert!(set.import_line(line).is_err(), "{line} should fail");
        }
        assert_eq!(set, before);
    }

    #[test]
    fn import_file_reads_lines_in_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("jan.log");
        fs::write(
            &path,
            "2021-01-04  2H  research  reading papers\n2021-01-05  1H  admin\n",
        )
        .unwrap();

        let mut set = LogSet::new();
        let added = set.import_file(&path).unwrap();
        assert_eq!(added, 2);
        assert_eq!(set.entries()[0].text(), Some("reading papers"));
        assert_eq!(set.entries()[1].tag(), "admin");
    }

    #[test]
    fn import_file_handles_crlf() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("win.log");
        fs::write(&path, "2021-01-04 2H research\r\n2021-01-05 1H admin notes\r\n").unwrap();

        let set = LogSet::from_file(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].text(), None);
        assert_eq!(set.entries()[1].text(), Some("notes"));
    }

    #[test]
    fn import_file_fails_fast_and_rolls_back() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.log");
        fs::write(
            &path,
            "2021-01-04 2H research\n2021-01-05 one admin\n2021-01-06 1H admin\n",
        )
        .unwrap();

        let mut set = LogSet::new();
        set.import_line("2020-12-31 1H admin").unwrap();
        let err = set.import_file(&path).unwrap_err();
        match err {
            ImportError::Parse {
                path: err_path,
                line_number,
                source,
            } => {
                assert_eq!(err_path, path);
                assert_eq!(line_number, 2);
                assert_eq!(source.line, "2021-01-05 one admin");
                assert_eq!(source.kind, ParseErrorKind::Grammar);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].tag(), "admin");
    }

    #[test]
    fn blank_lines_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("blank.log");
        fs::write(&path, "2021-01-04 2H research\n\n").unwrap();

        let err = LogSet::from_file(&path).unwrap_err();
        assert!(matches!(err, ImportError::Parse { line_number: 2, .. }));
    }

    #[test]
    fn non_utf8_line_is_a_parse_error_with_its_line_number() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("latin1.log");
        fs::write(&path, b"2021-01-04 2H research\n2021-01-05 1H admin caf\xe9\r\n").unwrap();

        let mut set = LogSet::new();
        let err = set.import_file(&path).unwrap_err();
        match err {
            ImportError::Parse {
                path: err_path,
                line_number,
                source,
            } => {
                assert_eq!(err_path, path);
                assert_eq!(line_number, 2);
                assert_eq!(source.kind, ParseErrorKind::InvalidUtf8);
                assert_eq!(source.line, "2021-01-05 1H admin caf\u{FFFD}");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(set.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nope.log");
        let err = LogSet::from_file(&path).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn append_merges_in_order() {
        let mut first = LogSet::new();
        first.import_line("2021-01-04 2H research").unwrap();
        let mut second = LogSet::new();
        second.import_line("2021-01-01 3H admin").unwrap();
        second.import_line("2021-01-02 1H dev").unwrap();

        first.append(second);
        let tags: Vec<_> = first.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, ["research", "admin", "dev"]);
        assert_eq!(first.total_duration(), 6);
    }

    #[test]
    fn filter_all_is_a_conjunction() {
        let mut set = LogSet::new();
        set.import_line("2021-01-04 2H research papers").unwrap();
        set.import_line("2021-01-05 1H research").unwrap();
        set.import_line("2021-01-04 1H admin papers").unwrap();

        let filters = [
            Filter::new(Predicate::HasTag, &["research"]).unwrap(),
            Filter::new(Predicate::Contains, &["PAPERS"]).unwrap(),
        ];
        let result = set.filter_all(&filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result.entries()[0].duration(), 2);

        assert_eq!(set.filter_all(&[]), set);
    }
}
