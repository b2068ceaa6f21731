//! Logging backend for the chatline binary.
//!
//! Library code logs through the `log` facade only. The binary installs this
//! logger, which writes `[timestamp] [LEVEL] [target] message` lines to stderr
//! so stdout stays clean for the rendered chat line.
//!
//! Level precedence: `--log-level` flag, then the `CHATLINE_LOG` environment
//! variable (`off`, `error`, `warn`, `info`, `debug`, `trace` or `0`-`4`),
//! then off.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no level is passed explicitly.
pub const LOG_ENV_VAR: &str = "CHATLINE_LOG";

/// Parse a level name or the numeric `0`-`4` scale.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    match value.parse::<u8>() {
        Ok(0) => Some(LevelFilter::Off),
        Ok(1) => Some(LevelFilter::Error),
        Ok(2) => Some(LevelFilter::Info),
        Ok(3) => Some(LevelFilter::Debug),
        Ok(4) => Some(LevelFilter::Trace),
        Ok(_) => None,
        Err(_) => value.parse::<LevelFilter>().ok(),
    }
}

fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Off)
}

struct StderrLogger {
    level: LevelFilter,
    out: Mutex<std::io::Stderr>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = self.out.lock();
        // Logging must never take the process down
        let _ = writeln!(
            out,
            "[{}] [{:<5}] [{}] {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger.
///
/// `level` overrides the environment. Calling this more than once keeps the
/// first logger, so later calls can only lower the level. Returns the level
/// in effect.
pub fn init_logger(level: Option<LevelFilter>) -> LevelFilter {
    let level = level.unwrap_or_else(level_from_env);
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level,
        out: Mutex::new(std::io::stderr()),
    });
    if log::set_logger(logger).is_err() {
        log::debug!("Logger already installed");
    }
    let effective = level.min(logger.level);
    log::set_max_level(effective);
    effective
}
