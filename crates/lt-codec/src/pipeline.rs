//! Per-level encode pipeline: ranges -> layout -> compression.

use crate::retry::compress_with_retry;
use crate::traits::Compressor;
use lt_core::{natural_len, serialize_record, LevelRecord, Partition, DEFAULT_MIN_BUFFER_LEN};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A compressed level, ready to be written.
#[derive(Debug, Clone)]
pub struct EncodedLevel {
    pub level: u8,
    pub total_count: u32,
    pub range_count: usize,
    /// Unpadded layout length.
    pub natural_len: usize,
    /// Length after the size floor was applied.
    pub padded_len: usize,
    /// Length the compressor accepted, including retry padding.
    pub input_len: usize,
    pub attempts: usize,
    pub data: Vec<u8>,
}

impl EncodedLevel {
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 1.0;
        }
        self.data.len() as f64 / self.input_len as f64
    }

    pub fn stats(&self) -> LevelStats {
        LevelStats {
            level: self.level,
            total_count: self.total_count,
            range_count: self.range_count,
            natural_len: self.natural_len,
            input_len: self.input_len,
            compressed_len: self.data.len(),
            attempts: self.attempts,
            ratio: self.ratio(),
        }
    }
}

/// Per-level statistics for reports and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    pub level: u8,
    pub total_count: u32,
    pub range_count: usize,
    pub natural_len: usize,
    pub input_len: usize,
    pub compressed_len: usize,
    pub attempts: usize,
    pub ratio: f64,
}

/// Serializes and compresses level records.
pub struct LevelEncoder<'a, C: Compressor + ?Sized> {
    compressor: &'a C,
    min_buffer_len: usize,
}

impl<'a, C: Compressor + ?Sized> LevelEncoder<'a, C> {
    pub fn new(compressor: &'a C) -> Self {
        Self { compressor, min_buffer_len: DEFAULT_MIN_BUFFER_LEN }
    }

    pub fn with_min_buffer_len(mut self, len: usize) -> Self {
        self.min_buffer_len = len;
        self
    }

    pub fn min_buffer_len(&self) -> usize {
        self.min_buffer_len
    }

    /// Serialize `record`, pad it to the size floor and compress it.
    pub fn encode(&self, record: &LevelRecord) -> EncodedLevel {
        let buffer = serialize_record(record, self.min_buffer_len);
        let padded_len = buffer.len();
        let outcome = compress_with_retry(self.compressor, buffer);
        let encoded = EncodedLevel {
            level: record.level,
            total_count: record.total_count,
            range_count: record.range_count(),
            natural_len: natural_len(record.range_count()),
            padded_len,
            input_len: outcome.input_len,
            attempts: outcome.attempts,
            data: outcome.compressed,
        };
        debug!(
            level = encoded.level,
            count = encoded.total_count,
            ranges = encoded.range_count,
            raw = encoded.padded_len,
            input = encoded.input_len,
            compressed = encoded.data.len(),
            ratio = encoded.ratio(),
            attempts = encoded.attempts,
            "encoded level"
        );
        encoded
    }

    /// Range-encode and compress every level of `partition`, in level order.
    pub fn encode_partition(&self, partition: &Partition, parallel: bool) -> Vec<EncodedLevel> {
        let buckets: Vec<(u8, &[u32])> = partition.iter().collect();
        let encode_one = |&(level, bucket): &(u8, &[u32])| {
            self.encode(&LevelRecord::from_sorted(level, bucket))
        };
        if parallel {
            buckets.par_iter().map(encode_one).collect()
        } else {
            buckets.iter().map(encode_one).collect()
        }
    }
}
