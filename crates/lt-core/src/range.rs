//! Run-length range encoding of a set of packed RGB values.

use serde::{Deserialize, Serialize};

/// A maximal run `[start, start + length - 1]` of consecutive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub start: u32,
    pub length: u32,
}

impl ColorRange {
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// One past the last value in the range.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    pub fn last(&self) -> u32 {
        self.end() - 1
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.start && value < self.end()
    }

    pub fn iter(&self) -> std::ops::Range<u32> {
        self.start..self.end()
    }
}

/// Sort `values` in place, then collapse them into ranges.
pub fn encode_ranges(values: &mut [u32]) -> Vec<ColorRange> {
    values.sort_unstable();
    encode_sorted(values)
}

/// Collapse ascending `values` into maximal contiguous ranges.
///
/// A value extends the current range only when it equals `last + 1`.
/// An empty slice yields no ranges.
pub fn encode_sorted(values: &[u32]) -> Vec<ColorRange> {
    let mut ranges = Vec::new();
    let Some((&first, rest)) = values.split_first() else {
        return ranges;
    };

    let mut current = ColorRange::new(first, 1);
    for &value in rest {
        if value == current.end() {
            current.length += 1;
        } else {
            ranges.push(current);
            current = ColorRange::new(value, 1);
        }
    }
    ranges.push(current);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(encode_sorted(&[]).is_empty());
        assert!(encode_ranges(&mut []).is_empty());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(encode_sorted(&[42]), vec![ColorRange::new(42, 1)]);
    }

    #[test]
    fn test_runs_and_gaps() {
        let ranges = encode_sorted(&[1, 2, 3, 5, 6, 9]);
        assert_eq!(
            ranges,
            vec![
                ColorRange::new(1, 3),
                ColorRange::new(5, 2),
                ColorRange::new(9, 1),
            ]
        );
    }

    #[test]
    fn test_unsorted_input() {
        let mut values = vec![9, 3, 1, 6, 2, 5];
        let ranges = encode_ranges(&mut values);
        assert_eq!(values, vec![1, 2, 3, 5, 6, 9]);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0], ColorRange::new(1, 3));
    }

    #[test]
    fn test_range_bounds() {
        let r = ColorRange::new(10, 4);
        assert_eq!(r.end(), 14);
        assert_eq!(r.last(), 13);
        assert!(r.contains(10));
        assert!(r.contains(13));
        assert!(!r.contains(14));
        assert!(!r.contains(9));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_top_of_space() {
        let ranges = encode_sorted(&[0xFF_FFFE, 0xFF_FFFF]);
        assert_eq!(ranges, vec![ColorRange::new(0xFF_FFFE, 2)]);
    }
}
