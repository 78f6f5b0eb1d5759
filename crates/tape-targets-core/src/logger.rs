//! Stderr logger for the vision coprocessor.
//!
//! Prints `LEVEL +elapsed_ms message` lines so per-frame diagnostics can be
//! correlated against the capture clock. Install once at startup with
//! [`init_with_level`]; later calls are no-ops.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct CoprocessorLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for CoprocessorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed_ms = self.started.elapsed().as_millis();
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "{:<5} +{}ms {}",
            record.level(),
            elapsed_ms,
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<CoprocessorLogger> = OnceLock::new();

/// Install the stderr logger with the given level filter.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| CoprocessorLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}
