use anyhow::{Context, Result};
use std::io::Write;
use tlog_core::{LogSet, render::write_json};

/// Prints the entries as a JSON array.
pub fn entries_mode<W: Write>(out: W, set: &LogSet, pretty: bool) -> Result<()> {
    write_json(out, set, pretty).context("writing entries")
}
