use crate::error::{LumaError, Result};
use crate::layout::DEFAULT_MIN_BUFFER_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for building and reading a brightness table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Destination directory for level files and the index.
    pub out_dir: PathBuf,
    /// Size floor for serialized level buffers.
    pub min_buffer_len: usize,
    /// File name of the count index.
    pub index_file: String,
    /// Optional extension for level files (`"17"` vs `"17.lz4"`).
    pub level_extension: Option<String>,
    /// Encode and compress levels concurrently.
    pub parallel: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("luma"),
            min_buffer_len: DEFAULT_MIN_BUFFER_LEN,
            index_file: "index.json".into(),
            level_extension: None,
            parallel: true,
        }
    }
}

impl TableConfig {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_min_buffer_len(mut self, len: usize) -> Self {
        self.min_buffer_len = len;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| LumaError::InvalidConfig(format!("read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_buffer_len < 4 {
            return Err(LumaError::InvalidConfig(format!(
                "min_buffer_len must be at least 4, got {}",
                self.min_buffer_len
            )));
        }
        if self.index_file.is_empty() {
            return Err(LumaError::InvalidConfig("index_file is empty".into()));
        }
        if self.level_extension.as_deref() == Some("") {
            return Err(LumaError::InvalidConfig("level_extension is empty".into()));
        }
        if (0..=255u8).any(|level| self.level_key(level) == self.index_file) {
            return Err(LumaError::InvalidConfig(format!(
                "index_file {:?} collides with a level file name",
                self.index_file
            )));
        }
        Ok(())
    }

    /// Storage key of a level file.
    pub fn level_key(&self, level: u8) -> String {
        match &self.level_extension {
            Some(ext) => format!("{level}.{ext}"),
            None => level.to_string(),
        }
    }
}
