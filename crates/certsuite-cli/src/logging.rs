//! Diagnostic logging to stderr.
//!
//! Reports go to stdout; everything emitted through `tracing` goes to stderr
//! so piping the report stays clean.
use tracing::Level;

/// Maps the `--quiet` and `--verbose` flags to the most verbose level shown.
pub fn level_for(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Installs the global stderr subscriber. Must be called once, before any
/// command runs.
pub fn init(quiet: bool, verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(quiet, verbose))
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(level_for(false, false), Level::WARN);
    }

    #[test]
    fn quiet_shows_errors_only() {
        assert_eq!(level_for(true, false), Level::ERROR);
    }

    #[test]
    fn verbose_shows_debug() {
        assert_eq!(level_for(false, true), Level::DEBUG);
    }
}
