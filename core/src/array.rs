//! Partition entry array location
//!
//! Three coordinate systems meet here:
//! - the entry array LBA declared by the header (disk-absolute),
//! - the header's own LBA (disk-absolute),
//! - the header's byte offset within the buffer.
//!
//! The buffer may be any contiguous slice of a larger disk. The only way to
//! learn which LBA it starts at is the header's description of itself.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{DecodeError, DecodeWarning, Result};
use crate::gpt::RawHeader;
use crate::sector::SectorSize;

/// Resolved entry array position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryArrayLocation {
    /// Byte offset of the entry array within the buffer
    pub offset: usize,
    /// Disk LBA the buffer is taken to start at
    pub buffer_start_lba: u64,
}

/// Compute the buffer offset of the partition entry array.
///
/// `buffer_start_lba = current_lba - header_offset / sector_size`, clamped to
/// 0. The array sits at `(partition_entry_lba - buffer_start_lba) *
/// sector_size`, unless that difference is negative, in which case the
/// array is assumed to follow the header's sector.
///
/// Fails with [`DecodeError::ArrayOutOfRange`] when the result is not below
/// `buffer_len`.
pub fn resolve_entry_array(
    header: &RawHeader,
    header_offset: usize,
    sector_size: SectorSize,
    buffer_len: usize,
    warnings: &mut Vec<DecodeWarning>,
) -> Result<EntryArrayLocation> {
    let sector_bytes = sector_size.get();
    let header_sectors = header_offset as u64 / sector_bytes;

    let buffer_start_lba = match header.current_lba.checked_sub(header_sectors) {
        Some(lba) => lba,
        None => {
            warn!(
                "Calculated start LBA is negative ({} - {}), assuming 0",
                header.current_lba, header_sectors
            );
            warnings.push(DecodeWarning::BufferStartClamped {
                current_lba: header.current_lba,
                header_sectors,
            });
            0
        }
    };

    let offset = match header.partition_entry_lba.checked_sub(buffer_start_lba) {
        Some(relative_lba) => relative_lba.saturating_mul(sector_bytes),
        None => {
            warn!(
                "Partition entries LBA {} is before buffer start LBA {}, falling back to next sector",
                header.partition_entry_lba, buffer_start_lba
            );
            warnings.push(DecodeWarning::EntryArrayFallback {
                partition_entry_lba: header.partition_entry_lba,
                buffer_start_lba,
            });
            (header_offset as u64).saturating_add(sector_bytes)
        }
    };

    if offset >= buffer_len as u64 {
        warn!(
            "Partition entry array offset {} exceeds buffer size {}",
            offset, buffer_len
        );
        return Err(DecodeError::ArrayOutOfRange {
            offset,
            buffer_len,
            header: Box::new(*header),
        });
    }

    debug!(
        "Partition entry LBA {}, buffer starts at LBA {}, array offset {} (0x{:X})",
        header.partition_entry_lba, buffer_start_lba, offset, offset
    );

    Ok(EntryArrayLocation {
        // Below buffer_len, so it fits
        offset: offset as usize,
        buffer_start_lba,
    })
}
