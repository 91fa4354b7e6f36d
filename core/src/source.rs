//! Bounded view over the raw image bytes

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};

/// Smallest buffer worth scanning: a protective MBR sector plus a header sector.
pub const MIN_INPUT_BYTES: usize = 1024;

/// Input buffer clamped to the configured search window.
#[derive(Debug, Clone, Copy)]
pub struct ByteSource<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSource<'a> {
    /// Wrap `bytes`, keeping at most `config.max_input_bytes` of them.
    pub fn new(bytes: &'a [u8], config: &DecodeConfig) -> Self {
        let len = bytes.len().min(config.max_input_bytes);
        Self { bytes: &bytes[..len] }
    }

    /// The bounded bytes
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of bounded bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when nothing was read
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reject buffers too short to hold any GPT.
    pub fn ensure_min_len(&self) -> Result<()> {
        if self.len() < MIN_INPUT_BYTES {
            return Err(DecodeError::InputTooSmall {
                len: self.len(),
                min: MIN_INPUT_BYTES,
            });
        }
        Ok(())
    }

    /// `len` bytes at `offset`, or `None` if that runs past the end.
    pub fn get(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }
}
