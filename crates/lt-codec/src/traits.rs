use lt_core::Result;

/// Compress-or-refuse capability.
pub trait Compressor: Send + Sync {
    /// Compress `input`. `None` means the input was refused and a different
    /// (longer) input should be tried.
    fn compress(&self, input: &[u8]) -> Option<Vec<u8>>;

    /// Short name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Inverse of a [`Compressor`].
pub trait Decompressor: Send + Sync {
    /// Decompress `input`. `size_hint` is the expected output length; the
    /// real output may be longer when compression padded the buffer.
    fn decompress(&self, input: &[u8], size_hint: usize) -> Result<Vec<u8>>;
}

/// A compressor that can also undo its own output.
pub trait Codec: Compressor + Decompressor {}

impl<T: Compressor + Decompressor> Codec for T {}

/// Built-in codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Lz4,
    Passthrough,
}

impl CodecKind {
    /// Parse a codec name. Unknown names fall back to LZ4.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "none" | "raw" | "passthrough" => Self::Passthrough,
            _ => Self::Lz4,
        }
    }

    pub fn build(self) -> Box<dyn Codec> {
        match self {
            Self::Lz4 => Box::new(crate::Lz4BlockCodec::new()),
            Self::Passthrough => Box::new(crate::PassthroughCodec),
        }
    }
}
