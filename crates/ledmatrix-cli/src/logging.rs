//! Minimal stderr logger for the `log` facade.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

/// Writes `LEVEL target: message` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "{} {}: {}",
            level_tag(record.level()),
            record.target().dimmed(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> colored::ColoredString {
    let tag = format!("{:<5}", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow().bold(),
        Level::Info => tag.green(),
        Level::Debug => tag.cyan(),
        Level::Trace => tag.dimmed(),
    }
}

/// Level used for a given `--verbose` setting.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the logger. Fails if another logger is already installed.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbose));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Warn);
    }

    #[test]
    fn test_level_tags_are_padded() {
        colored::control::set_override(false);
        assert_eq!(level_tag(Level::Warn).to_string(), "WARN ");
        assert_eq!(level_tag(Level::Error).to_string(), "ERROR");
    }
}
