use super::MarkerStore;
use crate::core::{Result, StorageError};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed marker store.
///
/// Markers are kept in memory as a flat string map and rewritten to a
/// JSON file on every mutation. The rewrite goes through a temp file
/// in the same directory that is renamed over the target, so a crash
/// mid-write cannot leave a truncated marker file behind.
///
/// # Examples
///
/// ```no_run
/// use versiongate::FileMarkerStore;
///
/// # fn main() -> Result<(), versiongate::StorageError> {
/// let store = FileMarkerStore::open("/var/lib/myapp/markers.json")?;
/// # Ok(())
/// # }
/// ```
pub struct FileMarkerStore {
    path: PathBuf,
    markers: HashMap<String, String>,
}

impl FileMarkerStore {
    /// Open a marker store at the given path.
    ///
    /// A missing file yields an empty store; the file is created on
    /// the first write. Unreadable or non-JSON content is an error:
    /// silently starting empty would re-run every recorded migration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let markers = if path.exists() {
            let mut file = File::open(&path)
                .map_err(|e| StorageError::IoError(format!("Failed to open marker file: {}", e)))?;
            let mut data = String::new();
            file.read_to_string(&mut data)
                .map_err(|e| StorageError::IoError(format!("Failed to read marker file: {}", e)))?;
            serde_json::from_str(&data).map_err(|e| {
                StorageError::CorruptData(format!("Failed to parse marker file: {}", e))
            })?
        } else {
            HashMap::new()
        };
        Ok(Self { path, markers })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::IoError(format!("Failed to create marker directory: {}", e))
                })?;
                parent
            }
            _ => Path::new("."),
        };
        let serialized = serde_json::to_vec_pretty(&self.markers)
            .map_err(|e| StorageError::IoError(format!("Failed to serialize markers: {}", e)))?;
        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::IoError(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(&serialized)
            .map_err(|e| StorageError::IoError(format!("Failed to write markers: {}", e)))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StorageError::IoError(format!("Failed to sync markers: {}", e)))?;
        temp.persist(&self.path)
            .map_err(|e| StorageError::IoError(format!("Failed to replace marker file: {}", e)))?;
        Ok(())
    }
}

impl MarkerStore for FileMarkerStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.markers.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.markers.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if self.markers.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
