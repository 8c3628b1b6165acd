mod chart_mode;
mod cli_mode;
mod entries_mode;
mod path_mode;
mod tags_mode;

pub use chart_mode::chart_mode;
pub use cli_mode::CliModeResult;
pub use entries_mode::entries_mode;
pub use path_mode::path_mode;
pub use tags_mode::tags_mode;
