//! PortalPaths - data directory path management
//!
//! ## Directory structure
//!
//! ```text
//! {base}/
//! └── data/
//!     └── portal.redb      # key-value store (document, session token, marker)
//! ```

use std::path::{Path, PathBuf};

/// Path helper for the portal data directory
#[derive(Debug, Clone)]
pub struct PortalPaths {
    /// Portal data root
    base: PathBuf,
}

impl PortalPaths {
    /// Create a new PortalPaths rooted at the given directory
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Get the data root
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Data directory: {base}/data/
    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Key-value database file: {base}/data/portal.redb
    pub fn db_file(&self) -> PathBuf {
        self.data_dir().join("portal.redb")
    }

    /// Ensure the data directory exists
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.data_dir())
    }
}
