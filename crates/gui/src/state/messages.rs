//! Application messages for inter-thread communication.

use quakemap_core::{Earthquake, PlateBoundaries};

use super::layers::OverlayId;

/// Messages sent from background fetch threads to the UI loop.
pub enum AppMessage {
    /// The plate boundary fetch resolved.
    PlatesLoaded(PlateBoundaries),
    /// The earthquake fetch resolved.
    EarthquakesLoaded(Vec<Earthquake>),
    /// A feed fetch failed; its overlay stays empty.
    FeedFailed {
        overlay: OverlayId,
        message: String,
    },
    /// A log message for the console.
    Log(LogEntry),
}

/// Log level for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
    Success,
}

/// A log entry for the console panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: std::time::SystemTime,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: std::time::SystemTime::now(),
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, msg)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, msg)
    }
}
