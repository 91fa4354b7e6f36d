//! GPT header search
//!
//! The header normally sits at LBA 1, but dumps taken from devices with
//! unknown sector sizes, or cut from the middle of a disk, put it elsewhere.
//! The search steps through the buffer at the smallest plausible sector
//! size so that no candidate alignment is skipped.

use crate::error::{DecodeError, Result};
use crate::gpt::{RawHeader, HEADER_SIZE};

/// Search granularity. Not a sector size claim.
pub const SCAN_STRIDE: usize = 512;

/// Header found by [`locate_header`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedHeader {
    /// Byte offset of the header within the buffer
    pub offset: usize,
    pub header: RawHeader,
}

/// Find the first `EFI PART` signature at a multiple of [`SCAN_STRIDE`].
///
/// Offsets are tried while `offset < bytes.len() - HEADER_SIZE`; the lowest
/// match wins. Nothing beyond the signature is validated.
pub fn locate_header(bytes: &[u8]) -> Result<LocatedHeader> {
    let scan_end = bytes.len().saturating_sub(HEADER_SIZE);

    for offset in (0..scan_end).step_by(SCAN_STRIDE) {
        let window = &bytes[offset..offset + HEADER_SIZE];
        if !RawHeader::has_signature(window) {
            continue;
        }

        if let Some(header) = RawHeader::parse(window) {
            info!("Found GPT header at offset {} (0x{:X})", offset, offset);
            return Ok(LocatedHeader { offset, header });
        }
    }

    debug!("No GPT signature in 0 - {} of {} bytes", scan_end, bytes.len());
    Err(DecodeError::HeaderNotFound {
        scanned_end: scan_end,
        buffer_len: bytes.len(),
    })
}
