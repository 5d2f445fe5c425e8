//! The session clock: elapsed minutes plus the expiry list.

use serde::{Deserialize, Serialize};

use crate::error::{ExpiryField, Result, TrackError};
use crate::expiry::Expiry;

/// Elapsed session time in minutes and the reminders tied to it.
///
/// One instance lives per game session, owned by the host and handed into
/// each command execution. All mutations validate their input first; a
/// rejected input leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClock {
    current_time: i64,
    expiries: Vec<Expiry>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            current_time: 0,
            expiries: Vec::new(),
        }
    }

    /// Elapsed minutes since session start. May be negative if the table
    /// rewinds past zero.
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    pub fn expiries(&self) -> &[Expiry] {
        &self.expiries
    }

    /// Set the clock to an absolute minute value.
    ///
    /// The raw input must parse as an integer; anything else is rejected
    /// with [`TrackError::InvalidTimeValue`] and the clock keeps its value.
    pub fn set_time(&mut self, raw: &str) -> Result<i64> {
        let minutes = parse_minutes(raw)?;
        self.current_time = minutes;
        Ok(minutes)
    }

    /// Add minutes to the clock; negative values subtract.
    pub fn advance_time(&mut self, raw: &str) -> Result<i64> {
        let delta = parse_minutes(raw)?;
        self.current_time = self.current_time.saturating_add(delta);
        Ok(self.current_time)
    }

    /// Register a reminder expiring `duration` minutes from now.
    ///
    /// All three fields are required; the duration must parse as an integer
    /// and may be negative, which produces an already-expired record. On
    /// failure nothing is appended and the error names the offending field.
    pub fn add_expiry(&mut self, owner: &str, label: &str, duration: &str) -> Result<Expiry> {
        let owner = owner.trim();
        let label = label.trim();
        let duration = duration.trim();

        let entry = format!("{}|{}|{}", owner, label, duration);
        if owner.is_empty() {
            return Err(TrackError::InvalidExpiryEntry {
                input: entry,
                field: ExpiryField::Owner,
            });
        }
        if label.is_empty() {
            return Err(TrackError::InvalidExpiryEntry {
                input: entry,
                field: ExpiryField::Label,
            });
        }
        let minutes: i64 = match duration.parse() {
            Ok(minutes) => minutes,
            Err(_) => {
                return Err(TrackError::InvalidExpiryEntry {
                    input: entry,
                    field: ExpiryField::Duration,
                });
            }
        };

        let record = Expiry {
            owner: owner.to_string(),
            label: label.to_string(),
            expires_at: self.current_time.saturating_add(minutes),
        };
        self.expiries.push(record.clone());
        Ok(record)
    }

    /// Whether a record has expired against the current clock value.
    /// Expiry is derived at query time, never stored.
    pub fn has_expired(&self, expiry: &Expiry) -> bool {
        expiry.expires_at <= self.current_time
    }

    /// Stable ascending sort by expiration minute.
    pub fn sort_expiries(&mut self) {
        self.expiries.sort_by_key(|e| e.expires_at);
    }

    /// Split the records into (active, expired), preserving their relative
    /// order. Stored state is untouched; callers that want the prune applied
    /// use [`SessionClock::retain_active`].
    pub fn partition_expiries(&self) -> (Vec<Expiry>, Vec<Expiry>) {
        self.expiries
            .iter()
            .cloned()
            .partition(|e| !self.has_expired(e))
    }

    /// Drop expired records in place, returning how many were removed.
    pub fn retain_active(&mut self) -> usize {
        let before = self.expiries.len();
        let now = self.current_time;
        self.expiries.retain(|e| e.expires_at > now);
        before - self.expiries.len()
    }

    /// Serializable image of the current state for the host's save hook.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: 1,
            current_time: self.current_time,
            expiries: self.expiries.clone(),
        }
    }

    /// Rebuild a clock from a previously taken snapshot.
    pub fn restore(snapshot: Snapshot) -> Self {
        Self {
            current_time: snapshot.current_time,
            expiries: snapshot.expiries,
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Persistent image of a [`SessionClock`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub current_time: i64,
    #[serde(default)]
    pub expiries: Vec<Expiry>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: 1,
            current_time: 0,
            expiries: Vec::new(),
        }
    }
}

fn parse_minutes(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| TrackError::InvalidTimeValue {
            input: raw.to_string(),
        })
}
