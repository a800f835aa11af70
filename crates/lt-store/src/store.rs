//! Key/value backends for level files and the index.

use lt_core::{LumaError, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flat key/value storage for a single table.
pub trait TableStore: Send + Sync {
    /// Make the store writable. Called once before the first `put`.
    fn prepare(&self) -> Result<()>;
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
    fn get(&self, key: &str) -> Result<Vec<u8>>;
    fn contains(&self, key: &str) -> bool;
    /// Keys in ascending byte order.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Directory-backed store with atomic writes.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl TableStore for FileStore {
    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| LumaError::Storage(format!("mkdir {}: {e}", self.root.display())))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.resolve_path(key);
        let tmp_path = self.resolve_path(&format!("{key}.tmp"));
        let result = (|| -> std::io::Result<()> {
            let mut f = fs::File::create(&tmp_path)?;
            f.write_all(value)?;
            f.flush()?;
            f.sync_all()?;
            fs::rename(&tmp_path, &path)?;
            Ok(())
        })();
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(LumaError::Storage(format!("write {}: {e}", path.display())));
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(key);
        fs::read(&path).map_err(|e| LumaError::Storage(format!("read {}: {e}", path.display())))
    }

    fn contains(&self, key: &str) -> bool {
        self.resolve_path(key).is_file()
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| LumaError::Storage(format!("ls {}: {e}", self.root.display())))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                keys.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-memory store.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TableStore for MemoryStore {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.data
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| LumaError::Storage(format!("missing key {key}")))
    }

    fn contains(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }
}
