pub mod config;
pub mod entry;
pub mod error;
pub mod filters;
pub mod import;
pub mod log_set;
pub mod parse_entries;
pub mod paths;
pub mod render;
pub mod summary;
pub mod tags;

pub use config::Config;
pub use entry::LogEntry;
pub use error::{FilterError, ImportError, ParseError, ParseErrorKind, SerializeError};
pub use filters::{Filter, Predicate};
pub use import::{ImportResult, import_dir};
pub use log_set::LogSet;
pub use parse_entries::parse_line;
pub use summary::{ChartData, hours_by_tag};
pub use tags::{TagIndex, tags_of};
