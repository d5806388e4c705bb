//! Refreshable catalog handle shared between requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::error::IngestError;
use super::index::StationIndex;
use super::loader::load_csv_path;

/// Thread-safe catalog handle supporting background refresh.
///
/// Readers take an `Arc<StationIndex>` snapshot and plan against it without
/// holding the lock. A refresh swaps in a new index; plans already running
/// keep the snapshot they started with.
#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Arc<StationIndex>>>,
    source: Option<PathBuf>,
}

impl SharedCatalog {
    /// Wrap an already-built index. Such a catalog cannot be reloaded.
    pub fn new(index: StationIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
            source: None,
        }
    }

    /// Load the catalog from a CSV file and remember the path for reloads.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, IngestError> {
        let path = path.into();
        let index = read_index(&path)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
            source: Some(path),
        })
    }

    /// Current catalog snapshot.
    pub async fn snapshot(&self) -> Arc<StationIndex> {
        self.inner.read().await.clone()
    }

    /// Swap in a new index.
    pub async fn replace(&self, index: StationIndex) {
        let mut guard = self.inner.write().await;
        *guard = Arc::new(index);
    }

    /// Re-read the source file.
    ///
    /// On success, replaces the current index and returns the number of
    /// stations. On failure, or when there is no source file, the existing
    /// index is preserved.
    pub async fn reload(&self) -> Result<Option<usize>, IngestError> {
        let Some(path) = &self.source else {
            return Ok(None);
        };

        // Parse outside the lock and off the async workers.
        let path = path.clone();
        let index = tokio::task::spawn_blocking(move || read_index(&path)).await??;
        let count = index.len();
        self.replace(index).await;

        Ok(Some(count))
    }

    /// Path the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn read_index(path: &Path) -> Result<StationIndex, IngestError> {
    let report = load_csv_path(path)?;
    let index = StationIndex::new(report.stations);
    info!(
        path = %path.display(),
        stations = index.len(),
        eligible = index.eligible_count(),
        skipped = report.skipped,
        ungeocoded = report.ungeocoded,
        "loaded fuel station catalog"
    );
    Ok(index)
}
