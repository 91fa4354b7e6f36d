// stderr sink for the `log` facade

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prefix = match record.level() {
            Level::Error => "ERROR: ",
            Level::Warn => "=> Warning: ",
            Level::Info => "=> ",
            Level::Debug | Level::Trace => "   ",
        };
        let _ = writeln!(std::io::stderr().lock(), "{}{}", prefix, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the logger. `Info` by default, `Debug` when verbose.
pub fn init(verbose: bool) {
    // Only fails if a logger is already set, which keeps that one
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    }
}
