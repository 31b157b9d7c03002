#![cfg(feature = "std")]
//! Minimal `log` backend. Records go to stderr so stdout stays free for
//! game results.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable read by [`init_logging`].
pub const LOG_LEVEL_VAR: &str = "BATTLESHIP_LOG";

/// Level used when `BATTLESHIP_LOG` is unset or unreadable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = io::stderr().lock();
        let _ = writeln!(out, "{:<5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter named by `value` (`off`, `warn`, `debug`, ...), any case.
/// Missing or unknown names give [`DEFAULT_LEVEL`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

pub fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_LEVEL_VAR).ok().as_deref())
}

/// Install the stderr logger at the level given by `BATTLESHIP_LOG`.
/// Later calls keep the first logger.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
