//! LZ4 block codec.
//!
//! Behaves like a raw LZ4 block encoder that reports failure for input it
//! cannot shrink: if the compressed block is not strictly smaller than the
//! input, the input is refused.

use crate::traits::{Compressor, Decompressor};
use lt_core::{LumaError, Result};
use lz4_flex::block::{self, DecompressError};

/// LZ4 expands at most ~255x; anything past this cannot be a valid block.
const MAX_EXPANSION: usize = 255;
const MIN_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4BlockCodec;

impl Lz4BlockCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for Lz4BlockCodec {
    fn compress(&self, input: &[u8]) -> Option<Vec<u8>> {
        let compressed = block::compress(input);
        if compressed.len() >= input.len() {
            return None;
        }
        Some(compressed)
    }

    fn name(&self) -> &str {
        "lz4"
    }
}

impl Decompressor for Lz4BlockCodec {
    fn decompress(&self, input: &[u8], size_hint: usize) -> Result<Vec<u8>> {
        let limit = input.len().saturating_mul(MAX_EXPANSION) + MIN_CAPACITY;
        let mut capacity = size_hint.max(MIN_CAPACITY).min(limit);
        loop {
            let mut out = vec![0u8; capacity];
            match block::decompress_into(input, &mut out) {
                Ok(written) => {
                    out.truncate(written);
                    return Ok(out);
                }
                Err(DecompressError::OutputTooSmall { .. }) if capacity < limit => {
                    capacity = (capacity * 2).min(limit);
                }
                Err(e) => return Err(LumaError::Decompression(format!("lz4: {e}"))),
            }
        }
    }
}
