use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn path_mode<W: Write>(mut out: W, log_dir: &Path) -> Result<()> {
    writeln!(out, "{}", log_dir.display())?;
    Ok(())
}
