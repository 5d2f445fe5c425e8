//! Boundary interfaces for the host platform. The core only produces
//! structured reports and snapshots; delivering and persisting them is the
//! host's side of the contract.

use anyhow::Result;

use crate::display::Report;
use crate::session::Snapshot;

/// Message sink interface: renders one report for the user.
pub trait MessageSink: Send + Sync {
    fn deliver(&mut self, report: &Report) -> Result<()>;
}

/// Snapshot store interface for the host's load/save hooks.
pub trait StateStore: Send + Sync {
    /// Load the persisted snapshot, falling back to a fresh session when
    /// nothing usable is stored.
    fn load(&self) -> Result<Snapshot>;

    /// Persist the snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
