pub enum CliModeResult {
    /// Every log file was imported.
    Finish,
    /// Output was printed, but some files could not be imported.
    Partial,
}
