//! Ordered writer for level files and the count index.

use crate::index::CountIndex;
use crate::store::TableStore;
use lt_codec::EncodedLevel;
use lt_core::{LumaError, Result, TableConfig, LEVEL_COUNT};
use tracing::debug;

/// Writes levels 0..=255 in order, then the index.
///
/// Any storage failure is returned immediately; nothing is retried.
pub struct TableWriter<'a, S: TableStore + ?Sized> {
    store: &'a S,
    config: &'a TableConfig,
    counts: Vec<u32>,
    bytes_written: usize,
}

impl<'a, S: TableStore + ?Sized> TableWriter<'a, S> {
    /// Prepare the store. Fails if the destination cannot be created.
    pub fn new(store: &'a S, config: &'a TableConfig) -> Result<Self> {
        store.prepare()?;
        Ok(Self {
            store,
            config,
            counts: Vec::with_capacity(LEVEL_COUNT),
            bytes_written: 0,
        })
    }

    /// Levels written so far.
    pub fn written(&self) -> usize {
        self.counts.len()
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Persist the next level. Levels must arrive in ascending order.
    pub fn write_level(&mut self, level: &EncodedLevel) -> Result<()> {
        if level.level as usize != self.counts.len() {
            return Err(LumaError::InvalidLevel(level.level as usize));
        }
        let key = self.config.level_key(level.level);
        self.store.put(&key, &level.data)?;
        self.counts.push(level.total_count);
        self.bytes_written += level.data.len();
        debug!(level = level.level, key = %key, bytes = level.data.len(), "wrote level");
        Ok(())
    }

    /// Write the count index. All 256 levels must have been written.
    pub fn finish(self) -> Result<CountIndex> {
        if self.counts.len() != LEVEL_COUNT {
            return Err(LumaError::IncompleteTable {
                written: self.counts.len(),
                expected: LEVEL_COUNT,
            });
        }
        let index = CountIndex::new(self.counts)?;
        self.store.put(&self.config.index_file, &index.to_json()?)?;
        debug!(key = %self.config.index_file, total = index.total(), "wrote count index");
        Ok(index)
    }
}
