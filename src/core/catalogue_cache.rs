use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

use crate::core::loader::load_catalogue;
use crate::error::CatalogueError;
use crate::models::Catalogue;

/// Entry in the catalogue cache
struct CacheEntry {
    /// Loaded snapshot
    catalogue: Arc<Catalogue>,
    /// File modification time when loaded
    modified: SystemTime,
}

/// Cache of loaded catalogues keyed by canonical path
///
/// A changed file produces a new snapshot; callers holding the old `Arc`
/// keep seeing the catalogue they started with.
#[derive(Default)]
pub struct CatalogueCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl CatalogueCache {
    /// Create empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current snapshot, loading it on a miss or after the file changed
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Catalogue>, CatalogueError> {
        let read_error = |e| CatalogueError::ReadError(path.to_path_buf(), e);
        let canonical_path = path.canonicalize().map_err(read_error)?;
        let modified = std::fs::metadata(&canonical_path)
            .and_then(|m| m.modified())
            .map_err(read_error)?;

        if let Some(entry) = self.entries.get(&canonical_path) {
            if entry.modified == modified {
                debug!("Cache hit for catalogue: {}", canonical_path.display());
                return Ok(Arc::clone(&entry.catalogue));
            }
            debug!("Cache miss for catalogue (modified): {}", canonical_path.display());
        } else {
            debug!("Cache miss for catalogue (not cached): {}", canonical_path.display());
        }

        let catalogue = Arc::new(load_catalogue(path)?);
        self.entries.insert(
            canonical_path,
            CacheEntry {
                catalogue: Arc::clone(&catalogue),
                modified,
            },
        );
        Ok(catalogue)
    }

    /// Drop a path so the next lookup reads the file again
    pub fn invalidate(&mut self, path: &Path) {
        if let Ok(canonical_path) = path.canonicalize() {
            self.entries.remove(&canonical_path);
        }
    }
}
