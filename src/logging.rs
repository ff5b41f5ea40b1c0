//! Console Logger
//!
//! `log` backend writing `[target] message` lines to the browser console
//! (stderr when running natively).

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    // Keep only the last path segment: todo_sync_ui::store -> STORE
    let short = target.rsplit("::").next().unwrap_or(target).to_uppercase();
    format!("[{}] {}: {}", short, level, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Level comes from compile-time `TODO_LOG_LEVEL`.
pub fn init() {
    let level = parse_level(option_env!("TODO_LOG_LEVEL"));
    let logger = LOGGER.get_or_init(|| ConsoleLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_module_name() {
        let line = format_line(Level::Warn, "todo_sync_ui::store", "update failed");
        assert_eq!(line, "[STORE] WARN: update failed");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("nonsense")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }
}
