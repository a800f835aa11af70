//! Grouping of the full RGB space by brightness level.

use crate::brightness::{brightness, pack_rgb, LEVEL_COUNT, RGB_SPACE_SIZE};
use crate::record::LevelRecord;
use tracing::debug;

/// Every packed RGB value, bucketed by brightness level.
///
/// Enumeration runs `r`, `g`, `b` as nested loops, so packed values are
/// visited in ascending order and each bucket comes out already sorted.
#[derive(Debug, Clone)]
pub struct Partition {
    buckets: Vec<Vec<u32>>,
}

impl Partition {
    /// Build from explicit buckets in any order. Each bucket is sorted.
    /// Missing trailing levels are filled with empty buckets; extra buckets
    /// beyond level 255 are dropped.
    pub fn from_buckets(mut buckets: Vec<Vec<u32>>) -> Self {
        buckets.resize_with(LEVEL_COUNT, Vec::new);
        for bucket in &mut buckets {
            bucket.sort_unstable();
        }
        Self { buckets }
    }

    pub fn level(&self, level: u8) -> &[u32] {
        &self.buckets[level as usize]
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Population of each level, indexed by level.
    pub fn counts(&self) -> Vec<u32> {
        self.buckets.iter().map(|b| b.len() as u32).collect()
    }

    /// Iterate `(level, bucket)` in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u32])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(level, bucket)| (level as u8, bucket.as_slice()))
    }

    /// Range-encode every level.
    pub fn records(&self) -> Vec<LevelRecord> {
        self.iter()
            .map(|(level, bucket)| LevelRecord::from_sorted(level, bucket))
            .collect()
    }

    pub fn into_buckets(self) -> Vec<Vec<u32>> {
        self.buckets
    }
}

/// Enumerate all 16,777,216 colors and bucket them by brightness.
pub fn partition() -> Partition {
    // Roughly RGB_SPACE_SIZE / LEVEL_COUNT per level; real populations vary
    // a lot, so this only saves the first few reallocations.
    let mut buckets: Vec<Vec<u32>> = (0..LEVEL_COUNT)
        .map(|_| Vec::with_capacity(RGB_SPACE_SIZE / LEVEL_COUNT / 4))
        .collect();
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                buckets[brightness(r, g, b) as usize].push(pack_rgb(r, g, b));
            }
        }
    }
    debug!(colors = RGB_SPACE_SIZE, levels = LEVEL_COUNT, "partitioned RGB space");
    Partition { buckets }
}

/// Per-level populations without materializing the buckets.
pub fn level_counts() -> Vec<u32> {
    let mut counts = vec![0u32; LEVEL_COUNT];
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                counts[brightness(r, g, b) as usize] += 1;
            }
        }
    }
    counts
}
