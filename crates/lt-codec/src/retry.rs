//! Pad-and-retry driver around a refusing compressor.

use crate::traits::Compressor;
use tracing::trace;

/// Result of a successful compression.
#[derive(Debug, Clone)]
pub struct RetryOutcome {
    pub compressed: Vec<u8>,
    /// Length of the input the compressor finally accepted.
    pub input_len: usize,
    /// Number of compressor calls, including the successful one.
    pub attempts: usize,
}

/// Compress `buffer`, appending one zero byte after every refusal.
///
/// There is no attempt cap: each retry grows the input, and a real
/// compressor only refuses below some finite size.
pub fn compress_with_retry<C: Compressor + ?Sized>(compressor: &C, mut buffer: Vec<u8>) -> RetryOutcome {
    let mut attempts = 1;
    loop {
        if let Some(compressed) = compressor.compress(&buffer) {
            return RetryOutcome {
                compressed,
                input_len: buffer.len(),
                attempts,
            };
        }
        trace!(codec = compressor.name(), len = buffer.len(), attempts, "compressor refused input, padding");
        buffer.push(0);
        attempts += 1;
    }
}
