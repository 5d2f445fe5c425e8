//! TOML file-backed snapshot persistence.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::ports::StateStore;
use crate::session::Snapshot;

/// File-based snapshot store that implements [`StateStore`].
pub struct FileStateStore {
    state_path: PathBuf,
}

impl FileStateStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            state_path: default_state_path()?,
        })
    }

    pub fn with_path<P: AsRef<Path>>(state_path: P) -> Self {
        Self {
            state_path: state_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.state_path
    }
}

pub fn default_state_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "tabletick").context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().join("session.toml"))
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Snapshot> {
        if !self.state_path.exists() {
            return Ok(Snapshot::default());
        }

        let contents = fs::read_to_string(&self.state_path)
            .with_context(|| format!("Failed to read state file: {}", self.state_path.display()))?;

        match toml::from_str(&contents) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!(
                    "State file {} is malformed ({}), starting a fresh session",
                    self.state_path.display(),
                    e
                );
                Ok(Snapshot::default())
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        // parent() is Some("") for a bare relative filename
        if let Some(parent) = self.state_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }

        let contents =
            toml::to_string_pretty(snapshot).context("Failed to serialize state to TOML")?;

        fs::write(&self.state_path, contents)
            .with_context(|| format!("Failed to write state file: {}", self.state_path.display()))?;

        Ok(())
    }
}
