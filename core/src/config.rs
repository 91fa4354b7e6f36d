//! Decode configuration.
//!
//! Capacity limits for a single decode. Both bound memory and work no matter
//! what a corrupted header claims.

/// Default search window: the first 256 KiB of an image.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 256 * 1024;

/// Default cap on partition entries walked per decode.
pub const DEFAULT_MAX_PARTITIONS: usize = 256;

/// Decode limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Bytes of the image considered at most. Longer buffers are clamped.
    pub max_input_bytes: usize,
    /// Entry slots walked at most, whatever the header's entry count says.
    pub max_partitions: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_partitions: DEFAULT_MAX_PARTITIONS,
        }
    }
}

impl DecodeConfig {
    /// Set the search window size.
    pub fn input_limit(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Set the entry cap.
    pub fn partition_limit(mut self, count: usize) -> Self {
        self.max_partitions = count;
        self
    }
}
