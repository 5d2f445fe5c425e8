//! Text command parsing and execution.
//!
//! The parser checks verbs and argument shape; integer and emptiness
//! validation happens in the clock operations so those errors carry the raw
//! offending input.

use tracing::info;

use crate::display::Report;
use crate::error::{Result, TrackError};
use crate::session::SessionClock;

const USAGE: &[&str] = &[
    "help - displays this information",
    "show - displays the current time and expiries",
    "set <minutes> - sets the clock to an absolute minute value",
    "add <minutes> - advances the clock; negative values subtract",
    "exp <owner>|<label>|<duration> - adds an expiry due in <duration> minutes",
];

/// A parsed user command. Exactly one clock operation runs per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the recognized commands
    Help,
    /// Display the current time and expiries
    Show,
    /// Set the clock to an absolute minute value
    Set { minutes: String },
    /// Add minutes to the clock (negative values subtract)
    Advance { minutes: String },
    /// Register an expiry for an owner
    AddExpiry {
        owner: String,
        label: String,
        duration: String,
    },
}

impl Command {
    /// Parse one input line. A bare or empty line is a help request.
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        if line.is_empty() || line == "help" {
            return Ok(Command::Help);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "show" if rest.is_empty() => Ok(Command::Show),
            "show" => Err(TrackError::InvalidCommand {
                reason: "show takes no arguments".to_string(),
            }),
            "set" => Ok(Command::Set {
                minutes: single_value(rest, "set")?,
            }),
            "add" => Ok(Command::Advance {
                minutes: single_value(rest, "add")?,
            }),
            "exp" => parse_expiry(rest),
            other => Err(TrackError::InvalidCommand {
                reason: format!("unrecognized command: {}", other),
            }),
        }
    }
}

fn single_value(rest: &str, verb: &str) -> Result<String> {
    if rest.split_whitespace().count() > 1 {
        return Err(TrackError::InvalidCommand {
            reason: format!("{} takes a single minute value", verb),
        });
    }
    // May be empty; the clock rejects that with the raw input attached
    Ok(rest.to_string())
}

fn parse_expiry(rest: &str) -> Result<Command> {
    let mut fields = rest.splitn(3, '|');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(owner), Some(label), Some(duration)) => Ok(Command::AddExpiry {
            owner: owner.to_string(),
            label: label.to_string(),
            duration: duration.to_string(),
        }),
        _ => Err(TrackError::InvalidCommand {
            reason: "exp requires <owner>|<label>|<duration>".to_string(),
        }),
    }
}

/// Result of executing one command: the report to deliver, and whether the
/// session state changed (the host persists after each mutation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub report: Report,
    pub mutated: bool,
}

/// Execute one command against the session clock.
///
/// `show`, `set` and `add` display the full list and then drop the expired
/// records; `exp` sorts the list but keeps everything. On error the prior
/// state is intact and no report is produced.
pub fn execute(clock: &mut SessionClock, command: Command) -> Result<Outcome> {
    match command {
        Command::Help => {
            let mut report = Report::clock_only(clock);
            report.notes = USAGE.iter().map(|line| line.to_string()).collect();
            Ok(Outcome {
                report,
                mutated: false,
            })
        }
        Command::Show => {
            let report = Report::for_session(clock);
            let pruned = clock.retain_active();
            if pruned > 0 {
                info!("Dropped {} expired reminder(s) after display", pruned);
            }
            Ok(Outcome {
                report,
                mutated: pruned > 0,
            })
        }
        Command::Set { minutes } => {
            let now = clock.set_time(&minutes)?;
            info!("Clock set to {} minutes", now);
            let report = Report::for_session(clock);
            clock.retain_active();
            Ok(Outcome {
                report,
                mutated: true,
            })
        }
        Command::Advance { minutes } => {
            let now = clock.advance_time(&minutes)?;
            info!("Clock advanced to {} minutes", now);
            let report = Report::for_session(clock);
            clock.retain_active();
            Ok(Outcome {
                report,
                mutated: true,
            })
        }
        Command::AddExpiry {
            owner,
            label,
            duration,
        } => {
            let record = clock.add_expiry(&owner, &label, &duration)?;
            info!("Added expiry: {}", record);
            clock.sort_expiries();
            let report = Report::for_session(clock);
            Ok(Outcome {
                report,
                mutated: true,
            })
        }
    }
}
