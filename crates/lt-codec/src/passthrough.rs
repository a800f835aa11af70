use crate::traits::{Compressor, Decompressor};
use lt_core::Result;

/// Identity codec. Never refuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCodec;

impl Compressor for PassthroughCodec {
    fn compress(&self, input: &[u8]) -> Option<Vec<u8>> {
        Some(input.to_vec())
    }

    fn name(&self) -> &str {
        "none"
    }
}

impl Decompressor for PassthroughCodec {
    fn decompress(&self, input: &[u8], _size_hint: usize) -> Result<Vec<u8>> {
        Ok(input.to_vec())
    }
}
