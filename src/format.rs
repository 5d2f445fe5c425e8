//! Minutes-to-days/hours/minutes rendering for clock lines and remaining
//! durations.

const MINUTES_PER_DAY: u64 = 1440;
const MINUTES_PER_HOUR: u64 = 60;

/// Format a minute count as days, hours and minutes.
///
/// Zero-valued components are omitted. Compact mode uses `d`/`h`/`min`
/// suffixes separated by spaces; verbose mode spells the units out with an
/// `s` for counts above one, separated by `, `. Exactly zero always renders
/// as `0 minutes`. Negative inputs render the magnitude behind a `-` prefix
/// and are never clamped.
pub fn format_duration(minutes: i64, verbose: bool) -> String {
    // Special case for a freshly started session
    if minutes == 0 {
        return "0 minutes".to_string();
    }

    // unsigned_abs so i64::MIN cannot overflow on negation
    let total = minutes.unsigned_abs();
    let days = total / MINUTES_PER_DAY;
    let hours = (total % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let mins = total % MINUTES_PER_HOUR;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, verbose, "d", "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, verbose, "h", "hour"));
    }
    if mins > 0 {
        parts.push(unit(mins, verbose, "min", "minute"));
    }

    let separator = if verbose { ", " } else { " " };
    let body = parts.join(separator);

    if minutes < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn unit(count: u64, verbose: bool, compact: &str, word: &str) -> String {
    if verbose {
        let plural = if count > 1 { "s" } else { "" };
        format!("{} {}{}", count, word, plural)
    } else {
        format!("{}{}", count, compact)
    }
}
