use anyhow::{Context, Result};
use std::io::Write;
use tlog_core::{ChartData, LogSet, render::write_json};

/// Prints hours per day and tag: `{"labels":[...],"series":{"tag":[...]},"totals":{"tag":n},"total":n}`.
pub fn chart_mode<W: Write>(out: W, set: &LogSet, pretty: bool) -> Result<()> {
    write_json(out, &ChartData::from_set(set), pretty).context("writing chart data")
}
