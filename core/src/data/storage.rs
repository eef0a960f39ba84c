//! Persistence adapter — one JSON slot holding the whole site.
//!
//! `Storage` is bound to a single file path. `load` always yields a usable
//! configuration: a missing or undecodable slot falls back to the built-in
//! default site (logged at `warn` level when the slot existed but could
//! not be decoded). `save` serializes the full snapshot and overwrites the
//! slot synchronously — whole-file write, last-write-wins, no versioning.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StorageError;
use crate::types::site::SiteConfig;


/// File name of the site slot inside the config directory.
pub const SITE_FILE: &str = "site.json";


/// The boundary between the in-memory configuration and durable storage.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage adapter bound to an explicit slot path.
    pub fn new(path: PathBuf) -> Self {
        Storage { path }
    }

    /// Create a storage adapter for the standard slot inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Storage {
            path: dir.join(SITE_FILE),
        }
    }

    /// The slot path this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted configuration, falling back to the default site.
    ///
    /// A missing slot is the normal first-launch case and falls back
    /// silently. A slot that exists but cannot be read or decoded also
    /// falls back, with a warning — the default site is always a safe,
    /// editable starting point.
    pub fn load(&self) -> SiteConfig {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return SiteConfig::default_site();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read site slot");
                return SiteConfig::default_site();
            }
        };
        match serde_json::from_str::<SiteConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "site slot is not a valid configuration, using defaults"
                );
                SiteConfig::default_site()
            }
        }
    }

    /// Serialize `config` and overwrite the slot.
    ///
    /// Parent directories are created as needed.
    pub fn save(&self, config: &SiteConfig) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
