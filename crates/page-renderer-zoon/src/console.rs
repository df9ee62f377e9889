//! `log` sink writing to the browser console through zoon.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Short bracketed tag for a log target, e.g. `[PageTransformer/cards]`.
fn tag(target: &str) -> String {
    match target.rsplit("::").next() {
        Some(module) if module != target => format!("PageTransformer/{module}"),
        _ => "PageTransformer".to_owned(),
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = tag(record.target());
        match record.level() {
            Level::Error | Level::Warn => zoon::eprintln!("[{}] {}", tag, record.args()),
            _ => zoon::println!("[{}] {}", tag, record.args()),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the console. Later calls keep the first logger.
pub fn install_console_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
