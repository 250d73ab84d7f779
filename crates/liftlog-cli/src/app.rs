//! Application context for the Liftlog CLI.
//!
//! Bundles the parsed arguments with the loaded configuration and opens the
//! tracker the commands work against.

use std::path::PathBuf;

use liftlog_core::{JsonFileStore, Tracker};

use crate::cli::Cli;
use crate::config::{default_store_path, LiftlogConfig};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: LiftlogConfig,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli, config: LiftlogConfig) -> Self {
        Self { cli, config }
    }

    pub fn json(&self) -> bool {
        self.cli.json
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// `--store` / `LIFTLOG_STORE`, then the config file, then the XDG data dir.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.store.as_deref() {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.config.storage.path.as_deref() {
            return Ok(PathBuf::from(path));
        }
        default_store_path()
    }

    pub fn open_tracker(&self) -> anyhow::Result<Tracker<JsonFileStore>> {
        let path = self.store_path()?;
        let store = JsonFileStore::open(&path)
            .map_err(|e| anyhow::anyhow!("Failed to open store {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), namespace = self.config.namespace(), "store opened");
        Ok(Tracker::with_namespace(store, self.config.namespace()))
    }
}
