//! Structured display payloads handed to the message sink.
//!
//! The core emits plain strings and data only; any platform markup is the
//! sink's business.

use std::fmt;

use crate::format::format_duration;
use crate::session::SessionClock;

/// Status column for one expiry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Expired,
    /// Compact-formatted remaining duration, e.g. `1h 30min`
    Remaining(String),
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Expired => write!(f, "expired"),
            EntryStatus::Remaining(rest) => write!(f, "{}", rest),
        }
    }
}

/// One (owner, label, status) display triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub owner: String,
    pub label: String,
    pub status: EntryStatus,
}

/// What the sink renders after a command: a verbose clock line, the expiry
/// entries in stored order, and free-form note lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub clock: String,
    pub entries: Vec<EntryLine>,
    pub notes: Vec<String>,
}

impl Report {
    /// Clock line plus one entry per stored record. Expired records show as
    /// `expired`; the rest show their remaining time, compact.
    pub fn for_session(clock: &SessionClock) -> Self {
        let entries = clock
            .expiries()
            .iter()
            .map(|e| {
                let status = if clock.has_expired(e) {
                    EntryStatus::Expired
                } else {
                    let remaining = e.expires_at.saturating_sub(clock.current_time());
                    EntryStatus::Remaining(format_duration(remaining, false))
                };
                EntryLine {
                    owner: e.owner.clone(),
                    label: e.label.clone(),
                    status,
                }
            })
            .collect();

        Self {
            clock: format_duration(clock.current_time(), true),
            entries,
            notes: Vec::new(),
        }
    }

    /// Just the clock line, no entries. Used for the help text and the
    /// opening banner.
    pub fn clock_only(clock: &SessionClock) -> Self {
        Self {
            clock: format_duration(clock.current_time(), true),
            entries: Vec::new(),
            notes: Vec::new(),
        }
    }
}
