use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::Level;

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Level, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn all_logs(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
