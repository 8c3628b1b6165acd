use anyhow::{Context, Result};
use std::io::Write;
use tlog_core::{LogSet, render::write_json};

/// Prints a JSON object mapping each tag to its entries.
pub fn tags_mode<W: Write>(out: W, set: &LogSet, pretty: bool) -> Result<()> {
    write_json(out, &set.tags(), pretty).context("writing tag index")
}
