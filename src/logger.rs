use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, Metadata, Record};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::RwLock;
use std::time::{Duration, Instant};

static FORM_LOGGER: Lazy<FormLogger> = Lazy::new(FormLogger::new);

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    let max_level = config.min_level.to_log_level_filter();
    FORM_LOGGER.update_config(config);

    // A second init only swaps the config; the backend stays registered.
    if log::set_logger(&*FORM_LOGGER).is_err() {
        log::debug!("Logger already installed, configuration updated");
    }

    log::set_max_level(max_level);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }

    pub fn from_log_level(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub module: String,
    pub file: String,
    pub line: u32,
}

impl LogEntry {
    fn from_record(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::from_log_level(record.level()),
            message: record.args().to_string(),
            module: record.module_path().unwrap_or("unknown").to_string(),
            file: record.file().unwrap_or("unknown").to_string(),
            line: record.line().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub show_colors: bool,
    pub show_emojis: bool,
    pub show_file_location: bool,
    pub include_timestamp: bool,
    pub output_json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: true,
            show_emojis: true,
            show_file_location: false,
            include_timestamp: true,
            output_json: false,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn production() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: false,
            show_emojis: false,
            output_json: true,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self {
            min_level: LogLevel::Debug,
            show_colors: true,
            show_emojis: true,
            show_file_location: true,
            output_json: false,
            ..Default::default()
        }
    }
}

/// `log` backend. Everything goes to stderr; stdout is reserved for results.
pub struct FormLogger {
    config: RwLock<LoggerConfig>,
}

impl FormLogger {
    fn new() -> Self {
        Self {
            config: RwLock::new(LoggerConfig::default()),
        }
    }

    fn update_config(&self, new_config: LoggerConfig) {
        if let Ok(mut config) = self.config.write() {
            *config = new_config;
        }
    }

    fn format_line(entry: &LogEntry, config: &LoggerConfig) -> String {
        if config.output_json {
            return serde_json::to_string(entry).unwrap_or_default();
        }

        let (emoji, color) = match entry.level {
            LogLevel::Trace => ("🔍", Color::Cyan),
            LogLevel::Debug => ("🐛", Color::Blue),
            LogLevel::Info => ("💡", Color::Green),
            LogLevel::Warn => ("⚠️", Color::Yellow),
            LogLevel::Error => ("❌", Color::Red),
        };
        let level = if config.show_emojis {
            format!("{} {}", emoji, entry.level.as_str())
        } else {
            entry.level.as_str().to_string()
        };

        let dim = |text: String| {
            if config.show_colors {
                text.bright_black().to_string()
            } else {
                text
            }
        };

        let mut parts = Vec::with_capacity(4);
        if config.include_timestamp {
            parts.push(dim(entry.timestamp.format(TIMESTAMP_FORMAT).to_string()));
        }
        let level = format!("[{}]", level);
        parts.push(if config.show_colors {
            level.color(color).bold().to_string()
        } else {
            level
        });
        parts.push(format!("{}: {}", entry.module, entry.message));
        if config.show_file_location {
            parts.push(dim(format!("({}:{})", entry.file, entry.line)));
        }

        parts.join(" ")
    }
}

impl log::Log for FormLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.read() {
            Ok(config) => metadata.level() <= config.min_level.to_log_level_filter(),
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry::from_record(record);
        if let Ok(config) = self.config.read() {
            let line = Self::format_line(&entry, &config);
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Logs how long a named operation took once it goes out of scope.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        log::debug!("⏱️  Starting timer: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(
            "⏱️  {} completed in {}ms",
            self.name,
            self.elapsed().as_millis()
        );
    }
}

pub fn timer(name: &str) -> Timer {
    Timer::new(name)
}
