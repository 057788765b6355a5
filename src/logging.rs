//! Logging bootstrap.
//!
//! Routes the `log` facade to the browser console on wasm32 and to stderr
//! elsewhere. Initialization is idempotent; a repeated call only changes the
//! max level.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the console logger at `level`.
pub fn init_logging(level: LevelFilter) -> Result<(), String> {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            log::info!(
                "event=app_start status=ok version={} level={}",
                env!("CARGO_PKG_VERSION"),
                level
            );
            Ok(())
        }
        Err(_) if is_installed() => {
            log::set_max_level(level);
            Ok(())
        }
        Err(err) => Err(format!("another logger is already installed: {err}")),
    }
}

fn is_installed() -> bool {
    std::ptr::eq(
        log::logger() as *const dyn Log as *const (),
        &LOGGER as *const ConsoleLogger as *const (),
    )
}

/// `debug` in debug builds, `info` in release builds
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logging(LevelFilter::Debug).is_ok());
        assert!(init_logging(LevelFilter::Warn).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("todo_list_ui::store")
                .args(format_args!("loaded {} entries", 2))
                .build(),
        );
        assert_eq!(line, "INFO  todo_list_ui::store: loaded 2 entries");
    }

    #[test]
    fn test_default_level_matches_build_mode() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        assert_eq!(default_log_level(), expected);
    }
}
