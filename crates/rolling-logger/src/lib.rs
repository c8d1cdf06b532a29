//! Rolling Logger
//!
//! A `log` backend that keeps the most recent entries in a circular buffer
//! and echoes every line to the browser console (stderr when not on wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format_line(&self, app_name: &str) -> String {
        format!(
            "[{}] [{}] {:<5} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            app_name,
            self.level,
            self.message
        )
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_name: app_name.to_string(),
            level,
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Append an entry, evicting the oldest once full
    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Snapshot of buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn echo(&self, entry: &LogEntry) {
        let line = entry.format_line(&self.app_name);
        #[cfg(target_arch = "wasm32")]
        match entry.level {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
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
        self.echo(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered entries of the global logger (empty before `init_logger`)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

/// Recent entries formatted as display lines, newest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .map(|logger| {
            logger
                .entries()
                .iter()
                .rev()
                .map(|e| e.format_line(logger.app_name()))
                .collect()
        })
        .unwrap_or_default()
}
