//! Aggregated numbers for charting.
//!
//! A chart renderer only gets these series, never the log text itself.

use crate::log_set::LogSet;
use crate::parse_entries::DATE_FORMAT;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Total hours per tag.
pub fn hours_by_tag(set: &LogSet) -> BTreeMap<String, u64> {
    set.iter().fold(BTreeMap::new(), |mut hours, entry| {
        *hours.entry(entry.tag().to_string()).or_insert(0) += u64::from(entry.duration());
        hours
    })
}

/// Hours per day and per tag, ready for a bar chart.
///
/// `labels` are the distinct dates of the set in ascending order and each
/// series has one value per label (0 when the tag has no entry that day).
/// `totals` sums every series, `total` sums `totals`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: BTreeMap<String, Vec<u64>>,
    pub totals: BTreeMap<String, u64>,
    pub total: u64,
}

impl ChartData {
    pub fn from_set(set: &LogSet) -> Self {
        let dates: BTreeSet<NaiveDate> = set.iter().map(|e| e.date()).collect();
        let position: BTreeMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

        let mut series: BTreeMap<String, Vec<u64>> = BTreeMap::new();
        for entry in set {
            let values = series
                .entry(entry.tag().to_string())
                .or_insert_with(|| vec![0; dates.len()]);
            values[position[&entry.date()]] += u64::from(entry.duration());
        }

        Self {
            labels: dates
                .iter()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
            series,
            totals: hours_by_tag(set),
            total: set.total_duration(),
        }
    }
}
