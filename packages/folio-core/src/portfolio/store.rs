//! Saved portfolio file.

use crate::table::Table;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// What `PortfolioStore::clear` found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClearOutcome {
    Removed,
    NotPresent,
}

/// Location and freshness of the saved portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreStatus {
    pub path: PathBuf,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// A single CSV file holding the last uploaded table.
///
/// Uploads overwrite the whole file; derived columns are never written, they
/// are recomputed from the raw columns on every load.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a saved portfolio exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved table, or `None` if nothing has been saved.
    pub fn load(&self) -> Result<Option<Table>> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "No saved portfolio");
            return Ok(None);
        }

        let table = Table::from_path(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            rows = table.len(),
            "Loaded saved portfolio"
        );
        Ok(Some(table))
    }

    /// Overwrite the saved portfolio with `table`.
    pub fn save(&self, table: &Table) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        table.write_to(BufWriter::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            rows = table.len(),
            "Saved portfolio"
        );
        Ok(())
    }

    /// Delete the saved portfolio.
    ///
    /// A missing file is not an error; any other delete failure is.
    pub fn clear(&self) -> Result<ClearOutcome> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Cleared saved portfolio");
                Ok(ClearOutcome::Removed)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "No saved portfolio to clear");
                Ok(ClearOutcome::NotPresent)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Describe the backing file.
    pub fn status(&self) -> Result<StoreStatus> {
        let modified_at = match fs::metadata(&self.path) {
            Ok(meta) => Some(DateTime::<Utc>::from(meta.modified()?)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(StoreStatus {
            path: self.path.clone(),
            exists: modified_at.is_some(),
            modified_at,
        })
    }
}
