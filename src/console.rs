//! Plain-text message sink.

use anyhow::Result;
use std::io::{self, Write};

use crate::display::Report;
use crate::ports::MessageSink;

/// Renders reports as plain text lines, one entry per line.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send + Sync> MessageSink for ConsoleSink<W> {
    fn deliver(&mut self, report: &Report) -> Result<()> {
        writeln!(self.out, "[{}]", report.clock)?;
        for entry in &report.entries {
            writeln!(self.out, "{}'s {}: {}", entry.owner, entry.label, entry.status)?;
        }
        for note in &report.notes {
            writeln!(self.out, "{}", note)?;
        }
        Ok(())
    }
}
