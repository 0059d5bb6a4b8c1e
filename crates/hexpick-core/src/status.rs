use std::fmt;
use std::time::{Duration, Instant};

use crate::consts::READY_MESSAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral, used only for the `Ready` line.
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Neutral => "neutral",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Single-line status display. Success messages revert to `Ready` after
/// the configured timeout; anything else stays until overwritten.
#[derive(Clone, Debug)]
pub struct StatusLine {
    message: String,
    severity: Severity,
    revert_at: Option<Instant>,
    success_timeout: Duration,
}

impl StatusLine {
    pub fn new(success_timeout: Duration) -> Self {
        Self {
            message: READY_MESSAGE.to_string(),
            severity: Severity::Neutral,
            revert_at: None,
            success_timeout,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn set(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.message = message.into();
        self.severity = severity;
        self.revert_at = (severity == Severity::Success).then(|| now + self.success_timeout);
    }

    /// Revert an expired success message. Returns `true` if the line changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(at) if now >= at => {
                self.message = READY_MESSAGE.to_string();
                self.severity = Severity::Neutral;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending revert, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.revert_at.map(|at| at.saturating_duration_since(now))
    }
}
