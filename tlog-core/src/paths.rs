use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

/// Lists the log files directly inside `dir`, sorted by file name.
///
/// Sub-directories are not entered and hidden files (`.name`) are skipped.
pub fn list_log_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let p = entry.path();

        if p.is_file() && !is_hidden(&p) {
            file_paths.push(p);
        }
    }

    file_paths.sort();
    Ok(file_paths)
}

fn is_hidden(p: &Path) -> bool {
    p.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
