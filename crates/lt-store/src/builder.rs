//! End-to-end table build.

use crate::index::CountIndex;
use crate::store::{FileStore, TableStore};
use crate::writer::TableWriter;
use lt_codec::{Compressor, LevelEncoder, LevelStats};
use lt_core::{partition, Result, TableConfig};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub codec: String,
    pub min_buffer_len: usize,
    pub total_colors: u64,
    pub total_input_bytes: usize,
    pub total_compressed_bytes: usize,
    /// Levels whose first compression attempt was refused.
    pub retried_levels: usize,
    pub elapsed_ms: u64,
    pub levels: Vec<LevelStats>,
    pub index: CountIndex,
}

impl BuildReport {
    pub fn ratio(&self) -> f64 {
        if self.total_input_bytes == 0 {
            return 1.0;
        }
        self.total_compressed_bytes as f64 / self.total_input_bytes as f64
    }
}

/// Partitions the RGB space, encodes every level and writes the table.
pub struct TableBuilder<'a, C: Compressor + ?Sized> {
    config: TableConfig,
    compressor: &'a C,
}

impl<'a, C: Compressor + ?Sized> TableBuilder<'a, C> {
    pub fn new(config: TableConfig, compressor: &'a C) -> Self {
        Self { config, compressor }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Build into a [`FileStore`] rooted at the configured output directory.
    pub fn build(&self) -> Result<BuildReport> {
        let store = FileStore::new(&self.config.out_dir);
        self.build_into(&store)
    }

    /// Build into any store.
    pub fn build_into<S: TableStore + ?Sized>(&self, store: &S) -> Result<BuildReport> {
        self.config.validate()?;
        let started = Instant::now();
        info!(
            out_dir = %self.config.out_dir.display(),
            codec = self.compressor.name(),
            min_buffer_len = self.config.min_buffer_len,
            parallel = self.config.parallel,
            "building brightness table"
        );

        // Create the destination before spending time on encoding.
        let mut writer = TableWriter::new(store, &self.config)?;

        let partition = partition();
        let encoder = LevelEncoder::new(self.compressor).with_min_buffer_len(self.config.min_buffer_len);
        let encoded = encoder.encode_partition(&partition, self.config.parallel);
        drop(partition);

        let mut levels = Vec::with_capacity(encoded.len());
        for level in &encoded {
            writer.write_level(level)?;
            levels.push(level.stats());
        }
        let index = writer.finish()?;

        let report = BuildReport {
            codec: self.compressor.name().to_string(),
            min_buffer_len: self.config.min_buffer_len,
            total_colors: index.total(),
            total_input_bytes: levels.iter().map(|l| l.input_len).sum(),
            total_compressed_bytes: levels.iter().map(|l| l.compressed_len).sum(),
            retried_levels: levels.iter().filter(|l| l.attempts > 1).count(),
            elapsed_ms: started.elapsed().as_millis() as u64,
            levels,
            index,
        };
        info!(
            colors = report.total_colors,
            input_bytes = report.total_input_bytes,
            compressed_bytes = report.total_compressed_bytes,
            ratio = report.ratio(),
            retried = report.retried_levels,
            elapsed_ms = report.elapsed_ms,
            "brightness table written"
        );
        Ok(report)
    }
}
