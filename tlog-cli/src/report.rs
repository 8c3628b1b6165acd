use std::io::Write;
use tlog_core::ImportError;

/// Writes one line per failed file, e.g.
/// `* Could not import 'data/jan.log': line 3: invalid calendar date: `2021-02-30 1H dev``.
pub fn print_errors<W: Write>(mut out: W, errors: &[ImportError]) -> std::io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    writeln!(out, "Errors:")?;
    for error in errors {
        let message = match error {
            ImportError::Io { path, source } => {
                format!("* Could not import '{}': {}", path.display(), source)
            }
            ImportError::Parse {
                path,
                line_number,
                source,
            } => format!(
                "* Could not import '{}': line {}: {}",
                path.display(),
                line_number,
                source
            ),
        };
        writeln!(out, "{message}")?;
    }
    Ok(())
}
