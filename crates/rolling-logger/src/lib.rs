//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the platform sink: the browser console on
//! wasm32, `tracing` everywhere else.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger with a bounded history of recent entries
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    /// Create a logger keeping at most `capacity` entries at or above `level`
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    /// Write every buffered entry as one line to `writer`
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for entry in self.entries() {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    let line = wasm_line(entry);
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(target_arch = "wasm32")]
fn wasm_line(entry: &LogEntry) -> String {
    format!("[{}] {}", entry.target, entry.message)
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    let target = entry.target.as_str();
    let message = entry.message.as_str();
    match entry.level {
        Level::Error => tracing::error!(log_target = target, "{}", message),
        Level::Warn => tracing::warn!(log_target = target, "{}", message),
        Level::Info => tracing::info!(log_target = target, "{}", message),
        Level::Debug => tracing::debug!(log_target = target, "{}", message),
        Level::Trace => tracing::trace!(log_target = target, "{}", message),
    }
}

/// Install a rolling logger as the global `log` backend.
///
/// Returns the installed instance so callers can read the buffer later.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Install a `tracing-subscriber` fmt subscriber so forwarded records are printed.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(level: LevelFilter) {
    let max = match level {
        LevelFilter::Off | LevelFilter::Error => tracing::Level::ERROR,
        LevelFilter::Warn => tracing::Level::WARN,
        LevelFilter::Info => tracing::Level::INFO,
        LevelFilter::Debug => tracing::Level::DEBUG,
        LevelFilter::Trace => tracing::Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt().with_max_level(max).finish();
    // Leaves the `log` slot free for `init`
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn log_at(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_entries_in_order() {
        let logger = RollingLogger::new(10, LevelFilter::Debug);
        log_at(&logger, Level::Info, "first");
        log_at(&logger, Level::Warn, "second");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].level, Level::Warn);
        assert_eq!(entries[0].target, "test");
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            log_at(&logger, Level::Info, &format!("entry {}", i));
        }

        let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        log_at(&logger, Level::Debug, "noise");
        log_at(&logger, Level::Info, "still noise");
        log_at(&logger, Level::Error, "kept");

        assert_eq!(logger.len(), 1);
        assert_eq!(logger.entries()[0].message, "kept");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        log_at(&logger, Level::Info, "a");
        log_at(&logger, Level::Info, "b");
        assert_eq!(logger.capacity(), 1);
        assert_eq!(logger.entries()[0].message, "b");
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(4, LevelFilter::Info);
        log_at(&logger, Level::Info, "a");
        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_write_to_file() {
        let logger = RollingLogger::new(4, LevelFilter::Info);
        log_at(&logger, Level::Error, "Error adding todo: network down");
        log_at(&logger, Level::Info, "Loaded 3 todos");

        let mut file = tempfile::tempfile().expect("Failed to create temp file");
        logger.write_to(&mut file).expect("Failed to write log");

        use std::io::Seek;
        file.rewind().unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[ERROR] test: Error adding todo: network down"));
        assert!(lines[1].contains("[INFO] test: Loaded 3 todos"));
    }

    #[test]
    fn test_buffers_while_forwarding_to_tracing() {
        init_tracing(LevelFilter::Debug);
        init_tracing(LevelFilter::Debug);

        let logger = RollingLogger::new(4, LevelFilter::Debug);
        log_at(&logger, Level::Debug, "Added todo local-1");
        assert_eq!(logger.entries()[0].message, "Added todo local-1");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let first = init(8, LevelFilter::Info).expect("Failed to install logger");
        assert_eq!(first.capacity(), 8);
        assert!(init(8, LevelFilter::Info).is_err());
    }
}
