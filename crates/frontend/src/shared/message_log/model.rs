use contracts::system::username_chat::ApiStatus;
use std::collections::VecDeque;
use uuid::Uuid;

/// Severity of a log entry or an input hint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS class of a log entry with this severity
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "website-message",
            Severity::Warning => "website-warn-message",
            Severity::Error => "website-error-message",
        }
    }
}

impl From<ApiStatus> for Severity {
    fn from(status: ApiStatus) -> Self {
        match status {
            ApiStatus::Success => Severity::Info,
            ApiStatus::Warning => Severity::Warning,
            ApiStatus::Error => Severity::Error,
        }
    }
}

/// Message waiting to be appended to the log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogMessage {
    pub date: String,
    pub text: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub id: Uuid,
    pub date: String,
    pub text: String,
    pub severity: Severity,
}

/// Append-only log, newest entry first
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        date: impl Into<String>,
        text: impl Into<String>,
        severity: Severity,
    ) -> &LogEntry {
        self.entries.push_front(LogEntry {
            id: Uuid::new_v4(),
            date: date.into(),
            text: text.into(),
            severity,
        });
        &self.entries[0]
    }

    pub fn push(&mut self, message: LogMessage) -> &LogEntry {
        self.append(message.date, message.text, message.severity)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
