//! ContentContext - I/O primitives for the pie store
//!
//! The context provides access to storage and utilities. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::error::{ContentError, Result};
use crate::types::{Pie, PieId};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Metadata key for a pie's free-text classification
pub const META_PIE_TYPE: &str = "_pie_type";

/// Metadata key for a pie's ingredients block
pub const META_INGREDIENTS: &str = "_ingredients";

/// Context passed to every command - provides access, not logic
#[derive(Debug, Clone)]
pub struct ContentContext {
    /// Path to the data root directory
    root: PathBuf,
}

impl ContentContext {
    /// Create a new context for the given data root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the data root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the pies directory
    pub fn pies_dir(&self) -> PathBuf {
        self.root.join("pies")
    }

    /// Path to a pie's JSON file
    pub fn pie_path(&self, id: &PieId) -> PathBuf {
        self.pies_dir().join(format!("{}.json", id))
    }

    /// Path to the metadata directory
    pub fn meta_dir(&self) -> PathBuf {
        self.root.join("meta")
    }

    /// Path to a pie's metadata map file
    pub fn meta_path(&self, id: &PieId) -> PathBuf {
        self.meta_dir().join(format!("{}.json", id))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    // =========================================================================
    // Directory initialization
    // =========================================================================

    /// Check if all required directories exist
    pub fn directories_exist(&self) -> bool {
        self.root.exists() && self.pies_dir().exists() && self.meta_dir().exists()
    }

    /// Create the directory structure for the store
    ///
    /// This is idempotent - safe to call multiple times.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.pies_dir()).await?;
        fs::create_dir_all(self.meta_dir()).await?;
        Ok(())
    }

    /// Ensure directories exist, creating them if needed
    pub async fn ensure_directories(&self) -> Result<()> {
        if !self.directories_exist() {
            self.create_directories().await?;
        }
        Ok(())
    }

    // =========================================================================
    // Pie I/O
    // =========================================================================

    /// Read a pie file
    pub async fn read_pie(&self, id: &PieId) -> Result<Pie> {
        let path = self.pie_path(id);
        if !path.exists() {
            return Err(ContentError::not_found(id.as_str()));
        }

        let content = fs::read_to_string(&path).await?;
        let pie: Pie = serde_json::from_str(&content)?;
        Ok(pie)
    }

    /// Write a pie file (atomic write via temp file)
    pub async fn write_pie(&self, pie: &Pie) -> Result<()> {
        let path = self.pie_path(&pie.id);
        let content = serde_json::to_string_pretty(pie)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Delete a pie file and its metadata map
    pub async fn delete_pie_file(&self, id: &PieId) -> Result<()> {
        let pie_path = self.pie_path(id);
        let meta_path = self.meta_path(id);

        if pie_path.exists() {
            fs::remove_file(&pie_path).await?;
        }
        if meta_path.exists() {
            fs::remove_file(&meta_path).await?;
        }

        Ok(())
    }

    /// Check if a pie exists
    pub fn pie_exists(&self, id: &PieId) -> bool {
        self.pie_path(id).exists()
    }

    /// List all pie IDs by reading the pies directory
    pub async fn list_pie_ids(&self) -> Result<Vec<PieId>> {
        let pies_dir = self.pies_dir();
        if !pies_dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&pies_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(PieId::from_string(stem));
                }
            }
        }

        Ok(ids)
    }

    /// Read all pies
    pub async fn read_all_pies(&self) -> Result<Vec<Pie>> {
        let ids = self.list_pie_ids().await?;
        let mut pies = Vec::with_capacity(ids.len());

        for id in ids {
            pies.push(self.read_pie(&id).await?);
        }

        Ok(pies)
    }

    // =========================================================================
    // Metadata I/O
    // =========================================================================

    /// Read a pie's metadata map; a missing file reads as an empty map
    pub async fn read_meta(&self, id: &PieId) -> Result<BTreeMap<String, String>> {
        let path = self.meta_path(id);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&path).await?;
        let meta: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(meta)
    }

    /// Write a pie's metadata map (atomic write via temp file)
    pub async fn write_meta(&self, id: &PieId, meta: &BTreeMap<String, String>) -> Result<()> {
        let path = self.meta_path(id);
        let content = serde_json::to_string_pretty(meta)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Read a single metadata value; absent keys read as the empty string
    pub async fn get_meta(&self, id: &PieId, key: &str) -> Result<String> {
        let meta = self.read_meta(id).await?;
        Ok(meta.get(key).cloned().unwrap_or_default())
    }

    /// Set a single metadata value, overwriting any prior value
    pub async fn update_meta(&self, id: &PieId, key: &str, value: &str) -> Result<()> {
        let mut meta = self.read_meta(id).await?;
        meta.insert(key.to_string(), value.to_string());
        self.write_meta(id, &meta).await
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Try to acquire an exclusive lock (non-blocking)
    pub async fn lock(&self) -> Result<ContentLock> {
        let lock_path = self.lock_path();

        // Ensure parent directory exists
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        // Non-blocking lock attempt
        match file.try_lock_exclusive() {
            Ok(()) => Ok(ContentLock {
                file,
                path: lock_path,
            }),
            Err(_) => Err(ContentError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
pub struct ContentLock {
    file: std::fs::File,
    #[allow(dead_code)]
    path: PathBuf,
}

impl Drop for ContentLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}
