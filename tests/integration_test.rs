use anyhow::Result;

use tabletick::TrackError;
use tabletick::command::{self, Command};
use tabletick::display::EntryStatus;
use tabletick::session::SessionClock;

// Drives a session the way the host loop does: parse each input line,
// execute it against the clock, look at the report.
fn run(clock: &mut SessionClock, input: &str) -> tabletick::Result<command::Outcome> {
    let cmd = Command::parse(input)?;
    command::execute(clock, cmd)
}

#[test]
fn test_full_session_flow() -> Result<()> {
    let mut clock = SessionClock::new();

    // A fresh session opens at zero
    let outcome = run(&mut clock, "show")?;
    assert_eq!(outcome.report.clock, "0 minutes");
    assert!(outcome.report.entries.is_empty());
    assert!(!outcome.mutated);

    // The party starts an hour in and picks up two effects
    run(&mut clock, "set 60")?;
    run(&mut clock, "exp Thorin|Haste|30")?;
    run(&mut clock, "exp Gimli|Stoneskin|240")?;
    assert_eq!(clock.expiries().len(), 2);

    // Time passes; Haste runs out
    let outcome = run(&mut clock, "add 45")?;
    assert_eq!(clock.current_time(), 105);
    assert_eq!(outcome.report.clock, "1 hour, 45 minutes");

    assert_eq!(outcome.report.entries.len(), 2);
    assert_eq!(outcome.report.entries[0].owner, "Thorin");
    assert_eq!(outcome.report.entries[0].status, EntryStatus::Expired);
    assert_eq!(
        outcome.report.entries[1].status,
        EntryStatus::Remaining("3h 15min".to_string())
    );

    // The expired effect was displayed once and is now gone
    assert_eq!(clock.expiries().len(), 1);
    assert_eq!(clock.expiries()[0].owner, "Gimli");

    Ok(())
}

#[test]
fn test_expiries_are_listed_in_expiry_order() -> Result<()> {
    let mut clock = SessionClock::new();

    run(&mut clock, "exp Balin|Slow Fall|200")?;
    run(&mut clock, "exp Dwalin|Shield|15")?;
    let outcome = run(&mut clock, "exp Ori|Light|90")?;

    let labels: Vec<&str> = outcome
        .report
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Shield", "Light", "Slow Fall"]);

    Ok(())
}

#[test]
fn test_rejected_commands_leave_the_session_intact() -> Result<()> {
    let mut clock = SessionClock::new();
    run(&mut clock, "set 30")?;
    run(&mut clock, "exp Thorin|Haste|30")?;

    // Bad minute value
    let err = run(&mut clock, "set half past three").unwrap_err();
    assert!(matches!(err, TrackError::InvalidCommand { .. }));

    let err = run(&mut clock, "set abc").unwrap_err();
    assert_eq!(
        err,
        TrackError::InvalidTimeValue {
            input: "abc".to_string()
        }
    );

    // Bad expiry shape and bad expiry field
    assert!(run(&mut clock, "exp Thorin|Haste").is_err());
    assert!(run(&mut clock, "exp |Haste|10").is_err());
    assert!(run(&mut clock, "exp Thorin|Haste|later").is_err());

    // Unknown verb
    assert!(run(&mut clock, "rest 480").is_err());

    // Nothing above touched the state
    assert_eq!(clock.current_time(), 30);
    assert_eq!(clock.expiries().len(), 1);

    Ok(())
}

#[test]
fn test_help_lists_every_command() -> Result<()> {
    let mut clock = SessionClock::new();
    let outcome = run(&mut clock, "help")?;

    assert!(!outcome.mutated);
    for verb in ["help", "show", "set", "add", "exp"] {
        assert!(
            outcome
                .report
                .notes
                .iter()
                .any(|note| note.starts_with(verb)),
            "usage is missing the {} command",
            verb
        );
    }

    Ok(())
}

#[test]
fn test_rewinding_the_clock_revives_nothing() -> Result<()> {
    let mut clock = SessionClock::new();
    run(&mut clock, "exp Thorin|Haste|30")?;

    // Jump past the expiry and display: the record is pruned
    run(&mut clock, "set 100")?;
    assert!(clock.expiries().is_empty());

    // Rewinding afterwards cannot bring it back
    run(&mut clock, "set 0")?;
    let outcome = run(&mut clock, "show")?;
    assert!(outcome.report.entries.is_empty());

    Ok(())
}

#[test]
fn test_negative_clock_is_displayed_signed() -> Result<()> {
    let mut clock = SessionClock::new();
    let outcome = run(&mut clock, "set -90")?;
    assert_eq!(outcome.report.clock, "-1 hour, 30 minutes");

    Ok(())
}
