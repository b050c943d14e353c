//! Event System
//!
//! Activity-log events emitted while panels load.

use crate::dashboard::Panel;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    /// A result arrived for a view that is no longer shown.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Panel the event concerns, if any.
    pub panel: Option<Panel>,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(panel: Option<Panel>, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            panel,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn panel_with_level(
        panel: Panel,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Some(panel), msg, event_type, log_level)
    }

    pub fn discarded(panel: Panel, generation: u64) -> Self {
        Self::new(
            Some(panel),
            format!("Discarded stale result for {} (load #{})", panel, generation),
            EventType::Discarded,
            LogLevel::Debug,
        )
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
