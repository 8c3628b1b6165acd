use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the time log files.
    pub log_dir: PathBuf,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    log_dir: Option<PathBuf>,
    pretty: Option<bool>,
}

impl Config {
    /// Loads config from disk (first XDG path, then native) and applies defaults.
    ///
    /// A config file that can't be read or parsed is reported and ignored.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            log_dir: file_config.log_dir.unwrap_or_else(Self::default_log_dir),
            pretty: file_config.pretty.unwrap_or(false),
        }
    }

    /// Default log root: `{data_dir}/tlog`
    /// - macOS:   `~/Library/Application Support/tlog`
    /// - Linux:   `$XDG_DATA_HOME/tlog` or `~/.local/share/tlog`
    /// - Windows: `%APPDATA%\tlog`
    fn default_log_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("tlog");
            p
        } else {
            PathBuf::from("./tlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("tlog").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("tlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
