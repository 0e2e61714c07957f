//! The bookmark store: an ordered, unique list of URL strings backed by a
//! JSON array-of-strings file.

use std::fs;
use std::path::{Path, PathBuf};

use retronav_types::error::Result;

/// Ordered bookmark list with JSON-file persistence.
///
/// Insertion order is display order. Every mutation rewrites the whole
/// file; expected list sizes (personal bookmark counts) make incremental
/// persistence not worth having.
pub struct BookmarkStore {
    urls: Vec<String>,
    path: Option<PathBuf>,
}

impl BookmarkStore {
    /// Open a store backed by `path`, loading whatever is persisted there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            urls: Vec::new(),
            path: Some(path.into()),
        };
        store.load();
        store
    }

    /// An in-memory store with no backing file. `save` becomes a no-op.
    pub fn ephemeral() -> Self {
        Self {
            urls: Vec::new(),
            path: None,
        }
    }

    /// Replace the list with the persisted contents.
    ///
    /// Missing, unreadable, or malformed files (invalid JSON, non-array
    /// JSON, non-string elements) all yield an empty list. The failure is
    /// logged and never surfaced to the caller.
    pub fn load(&mut self) {
        let Some(path) = self.path.clone() else {
            self.urls.clear();
            return;
        };
        if !path.exists() {
            log::debug!("no bookmarks file at {}, starting empty", path.display());
            self.urls.clear();
            return;
        }
        self.urls = match read_list(&path) {
            Ok(urls) => urls,
            Err(e) => {
                log::warn!("unreadable bookmarks file {}: {e}", path.display());
                Vec::new()
            },
        };
    }

    /// Persist the current list. Write failures are logged and dropped.
    pub fn save(&self) {
        let Some(path) = &self.path else { return };
        if let Err(e) = write_list(path, &self.urls) {
            log::warn!("failed to save bookmarks to {}: {e}", path.display());
        }
    }

    /// Whether `url` is bookmarked.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    /// Append `url` if not already present. Persists and returns whether
    /// the list changed.
    pub fn add(&mut self, url: &str) -> bool {
        if self.contains(url) {
            return false;
        }
        self.urls.push(url.to_string());
        self.save();
        true
    }

    /// Remove `url` if present. Persists and returns whether the list
    /// changed.
    pub fn remove(&mut self, url: &str) -> bool {
        let before = self.urls.len();
        self.urls.retain(|u| u != url);
        if self.urls.len() == before {
            return false;
        }
        self.save();
        true
    }

    /// Toggle membership: remove if present, append at the end otherwise.
    /// Persists and returns the resulting membership state.
    pub fn toggle(&mut self, url: &str) -> bool {
        if self.remove(url) { false } else { self.add(url) }
    }

    /// All bookmarked URLs in display order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Read and parse a bookmarks file into a deduplicated URL list.
fn read_list(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let urls: Vec<String> = serde_json::from_slice(&bytes)?;
    Ok(dedup_preserving_order(urls))
}

/// Serialize and write the URL list wholesale.
fn write_list(path: &Path, urls: &[String]) -> Result<()> {
    let json = serde_json::to_vec(urls)?;
    fs::write(path, json)?;
    Ok(())
}

/// Drop duplicate URLs, keeping the first occurrence of each. The store
/// never writes duplicates itself; this guards against hand-edited files.
fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(urls.len());
    for url in urls {
        if !seen.contains(&url) {
            seen.push(url);
        }
    }
    seen
}
