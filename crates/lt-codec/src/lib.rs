//! Compression of serialized brightness levels.
//!
//! The compressor is an opaque capability that may refuse small inputs.
//! [`retry::compress_with_retry`] pads the buffer one zero byte at a time
//! until the compressor accepts it.

pub mod lz4;
pub mod passthrough;
pub mod pipeline;
pub mod retry;
pub mod traits;

pub use lz4::Lz4BlockCodec;
pub use passthrough::PassthroughCodec;
pub use pipeline::{EncodedLevel, LevelEncoder, LevelStats};
pub use retry::{compress_with_retry, RetryOutcome};
pub use traits::{Codec, CodecKind, Compressor, Decompressor};
