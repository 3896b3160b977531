//! Console Logger
//!
//! `log` backend for browser apps. Records go to the matching `console.*`
//! method on wasm32 and to stderr everywhere else, so code that logs can
//! also run under native unit tests.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_line(record.level(), &record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Debug builds log everything down to `Debug`, release builds stop at `Info`.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(level: Level, message: &str) -> String {
    format!("{:<5} {}", level, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        assert_eq!(format_line(Level::Warn, "[MAP] skipped"), "WARN  [MAP] skipped");
        assert_eq!(format_line(Level::Error, "boom"), "ERROR boom");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init(LevelFilter::Info);
        assert!(init(LevelFilter::Info).is_err());
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
