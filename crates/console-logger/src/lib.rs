//! Console Logger
//!
//! A `tracing` subscriber for single-page apps. Each formatted event goes
//! to the browser console (stderr off the web) and into a bounded ring of
//! recent lines that the app can read back for diagnostics.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log level '{0}'")]
    InvalidLevel(String),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Maximum level, as `trace` .. `error`.
    pub level: String,
    /// Lines kept in the ring buffer.
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    fn max_level(&self) -> Result<Level, LoggerError> {
        self.level
            .trim()
            .parse()
            .map_err(|_| LoggerError::InvalidLevel(self.level.clone()))
    }
}

/// Bounded buffer of the most recent log lines.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first.
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// `MakeWriter` that fans each event out to the console and the buffer.
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    buffer: LogBuffer,
    echo: bool,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, echo: true }
    }

    /// Buffer only, nothing printed.
    pub fn silent(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            echo: false,
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        EventWriter::new(self.clone(), Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        EventWriter::new(self.clone(), *meta.level())
    }
}

/// Collects one formatted event; emits it when dropped.
pub struct EventWriter {
    target: ConsoleMakeWriter,
    level: Level,
    bytes: Vec<u8>,
}

impl EventWriter {
    fn new(target: ConsoleMakeWriter, level: Level) -> Self {
        Self {
            target,
            level,
            bytes: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.bytes.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.bytes).into_owned();
        self.bytes.clear();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if self.target.echo {
                write_console(self.level, line);
            }
            self.target.buffer.push(line.to_string());
        }
    }
}

impl io::Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let message = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&message),
        Level::WARN => web_sys::console::warn_1(&message),
        Level::INFO => web_sys::console::info_1(&message),
        _ => web_sys::console::debug_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber. Returns the buffer it writes into.
pub fn init(config: &LoggerConfig) -> Result<LogBuffer, LoggerError> {
    let max_level = config.max_level()?;
    let buffer = LogBuffer::new(config.capacity);

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter::new(buffer.clone()))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn capture(buffer: &LogBuffer, level: Level, body: impl FnOnce()) {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .with_ansi(false)
            .with_writer(ConsoleMakeWriter::silent(buffer.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, body);
    }

    #[test]
    fn test_events_reach_buffer() {
        let buffer = LogBuffer::new(10);
        capture(&buffer, Level::INFO, || {
            tracing::info!(count = 3, "catalog loaded");
            tracing::debug!("filtered out");
            tracing::warn!("storage unreadable");
        });

        let lines = buffer.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("catalog loaded"));
        assert!(lines[0].contains("count=3"));
        assert!(lines[1].contains("WARN"));
    }

    #[test]
    fn test_ring_keeps_most_recent() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {i}"));
        }
        assert_eq!(buffer.recent_lines(), vec!["line 2", "line 3", "line 4"]);
        buffer.clear();
        assert!(buffer.recent_lines().is_empty());
    }

    #[test]
    fn test_writer_splits_lines() {
        let buffer = LogBuffer::new(10);
        let make = ConsoleMakeWriter::silent(buffer.clone());
        {
            let mut writer = make.make_writer();
            writer.write_all(b"first\nsecond\n\n").unwrap();
        }
        assert_eq!(buffer.recent_lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_level_parsing() {
        assert!(LoggerConfig::with_level("debug").max_level().is_ok());
        assert!(LoggerConfig::with_level("WARN").max_level().is_ok());
        assert!(matches!(
            LoggerConfig::with_level("loud").max_level(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());
        assert_eq!(buffer.recent_lines(), vec!["b"]);
    }
}
