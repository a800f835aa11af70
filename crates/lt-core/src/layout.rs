//! Fixed binary layout of a level record.
//!
//! All fields little-endian:
//!
//! | Offset      | Width | Field                      |
//! |-------------|-------|----------------------------|
//! | 0           | 4     | total color count          |
//! | 4 + 8i      | 4     | length of range `i`        |
//! | 8 + 8i      | 4     | first RGB value of range `i` |
//!
//! Buffers shorter than the minimum length are zero-padded up to it. The
//! padding carries no range. Compression may append further zero bytes.

use crate::brightness::RGB_SPACE_SIZE;
use crate::error::{LumaError, Result};
use crate::range::ColorRange;
use crate::record::LevelRecord;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Size floor applied to every serialized level.
pub const DEFAULT_MIN_BUFFER_LEN: usize = 80;

const HEADER_LEN: usize = 4;
const RANGE_LEN: usize = 8;

/// Unpadded byte length of a record with `range_count` ranges.
pub fn natural_len(range_count: usize) -> usize {
    HEADER_LEN + RANGE_LEN * range_count
}

/// Serialize a record into a buffer of `max(natural_len, min_len)` bytes.
pub fn serialize_record(record: &LevelRecord, min_len: usize) -> Vec<u8> {
    let natural = natural_len(record.ranges.len());
    let mut buf = vec![0u8; natural.max(min_len)];
    LittleEndian::write_u32(&mut buf[..HEADER_LEN], record.total_count);
    for (i, range) in record.ranges.iter().enumerate() {
        let off = HEADER_LEN + i * RANGE_LEN;
        LittleEndian::write_u32(&mut buf[off..off + 4], range.length);
        LittleEndian::write_u32(&mut buf[off + 4..off + 8], range.start);
    }
    buf
}

/// Decode a (decompressed) level buffer.
///
/// Reads ranges until their lengths add up to the header count. Ranges must
/// lie inside the RGB space, ascend and leave a gap between neighbours.
/// Everything after the last range must be zero padding.
pub fn decode_record(level: u8, data: &[u8]) -> Result<LevelRecord> {
    let mut cursor = Cursor::new(data);
    let total_count = cursor
        .read_u32::<LittleEndian>()
        .map_err(|e| LumaError::Layout(format!("level {level}: missing count header: {e}")))?;

    let mut ranges: Vec<ColorRange> = Vec::new();
    let mut seen: u64 = 0;
    while seen < total_count as u64 {
        let length = cursor.read_u32::<LittleEndian>();
        let start = cursor.read_u32::<LittleEndian>();
        let (length, start) = match (length, start) {
            (Ok(l), Ok(s)) => (l, s),
            _ => {
                return Err(LumaError::Layout(format!(
                    "level {level}: truncated after {} ranges ({seen} of {total_count} colors)",
                    ranges.len()
                )))
            }
        };
        if length == 0 {
            return Err(LumaError::Layout(format!(
                "level {level}: zero-length range at index {}",
                ranges.len()
            )));
        }
        if start as u64 + length as u64 > RGB_SPACE_SIZE as u64 {
            return Err(LumaError::Layout(format!(
                "level {level}: range {start:#x}+{length} runs past the RGB space"
            )));
        }
        if let Some(prev) = ranges.last() {
            if start <= prev.end() {
                return Err(LumaError::Layout(format!(
                    "level {level}: range at {start:#x} does not follow {:#x}+{} with a gap",
                    prev.start, prev.length
                )));
            }
        }
        seen += length as u64;
        ranges.push(ColorRange::new(start, length));
    }
    if seen != total_count as u64 {
        return Err(LumaError::Layout(format!(
            "level {level}: ranges cover {seen} colors, header says {total_count}"
        )));
    }

    let consumed = cursor.position() as usize;
    if let Some(pos) = data[consumed..].iter().position(|&b| b != 0) {
        return Err(LumaError::Layout(format!(
            "level {level}: non-zero padding byte at offset {}",
            consumed + pos
        )));
    }

    Ok(LevelRecord { level, total_count, ranges })
}
