use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend that writes to the browser console
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    let component = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}: {}", level, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_module_segment() {
        assert_eq!(
            format_line(Level::Warn, "expense_tracker_frontend::state::controller", "drift"),
            "[WARN] controller: drift"
        );
        assert_eq!(format_line(Level::Info, "main", "ready"), "[INFO] main: ready");
    }
}
