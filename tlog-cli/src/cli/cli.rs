use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tlog_core::{Filter, FilterError, Predicate};

/// tlog: time log to JSON
///
/// Reads every file of the log directory (lines like `2021-01-04  2H  research  reading papers`),
/// keeps the entries matching all the given filters and prints them as JSON.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("output").args(["by_tag", "chart", "path"])),
)]
pub struct Cli {
    /// Directory holding the log files. Defaults to `log_dir` from the config file.
    #[arg(long, short, env = "TLOG_DIR")]
    pub dir: Option<PathBuf>,

    /// Only entries with this exact tag (e.g. `--tag research`).
    #[arg(long)]
    pub tag: Option<String>,
    /// Only entries of this day (e.g. `--day 2021-01-04`).
    #[arg(long)]
    pub day: Option<String>,
    /// Only entries of this ISO week (e.g. `--week 2021 1`).
    #[arg(long, num_args = 2, value_names = ["YEAR", "WEEK"])]
    pub week: Option<Vec<String>>,
    /// Only entries of this month number (e.g. `--month 2021-03`). The year part is not compared.
    #[arg(long)]
    pub month: Option<String>,
    /// Only entries of this year (e.g. `--year 2021`).
    #[arg(long)]
    pub year: Option<String>,
    /// Only entries whose text contains this, ignoring case.
    #[arg(long)]
    pub contains: Option<String>,

    /// Prints an object mapping each tag to its entries.
    #[arg(long)]
    pub by_tag: bool,
    /// Prints hours per day and per tag, for charting.
    #[arg(long)]
    pub chart: bool,
    /// Prints the log directory.
    #[arg(long, short)]
    pub path: bool,

    /// Pretty-prints the JSON output.
    #[arg(long)]
    pub pretty: bool,
    /// Exits with an error when any file could not be imported.
    #[arg(long)]
    pub strict: bool,
    /// Shows debug logs on stderr (`TLOG_LOG` takes precedence).
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// Filters requested on the command line, in a fixed order.
    pub fn filters(&self) -> Result<Vec<Filter>, FilterError> {
        let requested = [
            (Predicate::HasTag, self.tag.as_ref().map(|t| vec![t.clone()])),
            (Predicate::HasDay, self.day.as_ref().map(|d| vec![d.clone()])),
            (Predicate::HasWeek, self.week.clone()),
            (Predicate::HasMonth, self.month.as_ref().map(|m| vec![m.clone()])),
            (Predicate::HasYear, self.year.as_ref().map(|y| vec![y.clone()])),
            (Predicate::Contains, self.contains.as_ref().map(|c| vec![c.clone()])),
        ];

        requested
            .into_iter()
            .filter_map(|(predicate, args)| args.map(|args| Filter::new(predicate, args.as_slice())))
            .collect()
    }
}
