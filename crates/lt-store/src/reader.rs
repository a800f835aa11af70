//! Reverse lookup over a written table: which colors have brightness N.

use crate::index::CountIndex;
use crate::store::TableStore;
use lt_codec::Decompressor;
use lt_core::{decode_record, natural_len, LevelRecord, LumaError, Result, TableConfig, RGB_SPACE_SIZE};
use tracing::debug;

pub struct TableReader<'a, S: TableStore + ?Sized, D: Decompressor + ?Sized> {
    store: &'a S,
    decompressor: &'a D,
    config: TableConfig,
    index: CountIndex,
}

impl<'a, S: TableStore + ?Sized, D: Decompressor + ?Sized> TableReader<'a, S, D> {
    /// Load the count index from `store`.
    pub fn open(store: &'a S, decompressor: &'a D, config: TableConfig) -> Result<Self> {
        let index = CountIndex::from_json(&store.get(&config.index_file)?)?;
        debug!(levels = index.as_slice().len(), total = index.total(), "opened table");
        Ok(Self { store, decompressor, config, index })
    }

    pub fn index(&self) -> &CountIndex {
        &self.index
    }

    /// Number of colors at `level`, from the index alone.
    pub fn count(&self, level: u8) -> u32 {
        self.index.get(level)
    }

    /// Decompress and decode one level.
    pub fn record(&self, level: u8) -> Result<LevelRecord> {
        let expected = self.index.get(level);
        let compressed = self.store.get(&self.config.level_key(level))?;
        let size_hint = natural_len(expected as usize).max(self.config.min_buffer_len);
        let raw = self.decompressor.decompress(&compressed, size_hint)?;
        let record = decode_record(level, &raw)?;
        if record.total_count != expected {
            return Err(LumaError::IndexMismatch { level, expected, got: record.total_count });
        }
        Ok(record)
    }

    /// Every color with brightness `level`, ascending.
    pub fn colors(&self, level: u8) -> Result<Vec<u32>> {
        Ok(self.record(level)?.colors().collect())
    }

    pub fn contains(&self, level: u8, rgb: u32) -> Result<bool> {
        Ok(self.record(level)?.contains(rgb))
    }

    /// Decode every level and check the table covers the RGB space.
    pub fn verify(&self) -> Result<()> {
        let mut total: u64 = 0;
        for level in 0..=255u8 {
            total += self.record(level)?.total_count as u64;
        }
        if total != RGB_SPACE_SIZE as u64 {
            return Err(LumaError::Layout(format!(
                "table covers {total} colors, expected {RGB_SPACE_SIZE}"
            )));
        }
        Ok(())
    }
}
