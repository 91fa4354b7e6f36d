//! Error and warning types for GPT decoding

use alloc::boxed::Box;
use core::fmt;

use crate::gpt::RawHeader;

/// Result type for decode operations
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Fatal decode failures. Each one ends the pipeline with no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer cannot hold a protective MBR sector plus a header sector
    InputTooSmall {
        /// Bytes available
        len: usize,
        /// Bytes required
        min: usize,
    },

    /// No 512-byte aligned offset carried the `EFI PART` signature
    HeaderNotFound {
        /// First offset that was no longer scanned
        scanned_end: usize,
        /// Bytes available
        buffer_len: usize,
    },

    /// Entry array resolves to an offset past the end of the buffer
    ArrayOutOfRange {
        /// Resolved byte offset (saturated on overflow)
        offset: u64,
        /// Bytes available
        buffer_len: usize,
        /// The header that was found, kept for diagnostics
        header: Box<RawHeader>,
    },
}

impl DecodeError {
    /// Header found before the failure, if the pipeline got that far.
    pub fn header(&self) -> Option<&RawHeader> {
        match self {
            Self::ArrayOutOfRange { header, .. } => Some(&**header),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooSmall { len, min } => {
                write!(f, "input too small to contain a GPT ({} bytes, need {})", len, min)
            }
            Self::HeaderNotFound { scanned_end, buffer_len } => write!(
                f,
                "GPT signature not found (searched 0 - {} of {} bytes)",
                scanned_end, buffer_len
            ),
            Self::ArrayOutOfRange { offset, buffer_len, header } => write!(
                f,
                "partition entry array at offset {} lies beyond the {} byte buffer (entry LBA {})",
                offset, buffer_len, header.partition_entry_lba
            ),
        }
    }
}

/// Non-fatal events recorded while decoding, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Sector size could not be derived from the header; 512 assumed
    SectorSizeDefaulted {
        /// Header's self-reported LBA
        current_lba: u64,
        /// Byte offset the header was found at
        header_offset: usize,
    },

    /// Header offset is not a multiple of its LBA; the quotient was truncated
    SectorSizeTruncated {
        /// Byte offset the header was found at
        header_offset: usize,
        /// Header's self-reported LBA
        current_lba: u64,
        /// Truncated sector size that is used from here on
        sector_size: u64,
    },

    /// Buffer would start before LBA 0; clamped to 0
    BufferStartClamped {
        /// Header's self-reported LBA
        current_lba: u64,
        /// Whole sectors in front of the header within the buffer
        header_sectors: u64,
    },

    /// Entry array LBA lies before the buffer; assumed right after the header
    EntryArrayFallback {
        /// Entry array LBA declared by the header
        partition_entry_lba: u64,
        /// LBA the buffer starts at
        buffer_start_lba: u64,
    },

    /// Buffer ended inside the entry array; later slots were not read
    EntryArrayTruncated {
        /// First slot that did not fit
        index: u32,
        /// Byte offset of that slot
        offset: usize,
    },

    /// Header declares more entries than the configured cap
    CapacityReached {
        /// Entry count from the header
        declared: u32,
        /// Configured cap
        limit: usize,
    },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectorSizeDefaulted { current_lba, header_offset } => write!(
                f,
                "cannot derive sector size (current LBA {} at offset {}), assuming 512 bytes",
                current_lba, header_offset
            ),
            Self::SectorSizeTruncated { header_offset, current_lba, sector_size } => write!(
                f,
                "offset {} is not a multiple of current LBA {}, sector size truncated to {}",
                header_offset, current_lba, sector_size
            ),
            Self::BufferStartClamped { current_lba, header_sectors } => write!(
                f,
                "calculated start LBA is negative ({} - {}), assuming 0",
                current_lba, header_sectors
            ),
            Self::EntryArrayFallback { partition_entry_lba, buffer_start_lba } => write!(
                f,
                "partition entries LBA {} is before buffer start LBA {}, using next sector",
                partition_entry_lba, buffer_start_lba
            ),
            Self::EntryArrayTruncated { index, offset } => write!(
                f,
                "reached end of data at entry {} (offset {}), stopping",
                index, offset
            ),
            Self::CapacityReached { declared, limit } => write!(
                f,
                "header declares {} entries, only the first {} were read",
                declared, limit
            ),
        }
    }
}
