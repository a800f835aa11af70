//! Range-compressed record of one brightness level.

use crate::range::{encode_ranges, encode_sorted, ColorRange};
use serde::{Deserialize, Serialize};

/// `(total_count, ranges)` for a single brightness level.
///
/// `total_count` always equals the sum of range lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: u8,
    pub total_count: u32,
    pub ranges: Vec<ColorRange>,
}

impl LevelRecord {
    pub fn new(level: u8, ranges: Vec<ColorRange>) -> Self {
        let total_count = ranges.iter().map(|r| r.length).sum();
        Self { level, total_count, ranges }
    }

    /// Encode an ascending bucket.
    pub fn from_sorted(level: u8, bucket: &[u32]) -> Self {
        Self::new(level, encode_sorted(bucket))
    }

    /// Encode a bucket in arbitrary order.
    pub fn from_bucket(level: u8, mut bucket: Vec<u32>) -> Self {
        Self::new(level, encode_ranges(&mut bucket))
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Binary search over the ranges.
    pub fn contains(&self, rgb: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.start <= rgb);
        idx > 0 && self.ranges[idx - 1].contains(rgb)
    }

    /// Every color in the level, ascending.
    pub fn colors(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(ColorRange::iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_count_matches_ranges() {
        let rec = LevelRecord::from_sorted(3, &[1, 2, 3, 7, 8]);
        assert_eq!(rec.total_count, 5);
        assert_eq!(rec.range_count(), 2);
    }

    #[test]
    fn test_contains() {
        let rec = LevelRecord::from_sorted(0, &[1, 2, 3, 7, 8, 20]);
        for v in [1, 2, 3, 7, 8, 20] {
            assert!(rec.contains(v), "{v}");
        }
        for v in [0, 4, 6, 9, 19, 21, u32::MAX] {
            assert!(!rec.contains(v), "{v}");
        }
    }

    #[test]
    fn test_colors_expands_ranges() {
        let rec = LevelRecord::from_bucket(9, vec![8, 1, 3, 2, 7]);
        assert_eq!(rec.colors().collect::<Vec<_>>(), vec![1, 2, 3, 7, 8]);
    }

    #[test]
    fn test_empty_record() {
        let rec = LevelRecord::from_sorted(1, &[]);
        assert!(rec.is_empty());
        assert!(!rec.contains(0));
        assert_eq!(rec.colors().count(), 0);
    }
}
