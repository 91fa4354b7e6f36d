//! Decode pipeline
//!
//! `Locate -> InferSectorSize -> ResolveArrayOffset -> DecodeEntries`.
//! The first three stages can stop the pipeline with a `DecodeError`;
//! entry decoding only ever shortens the result.

use alloc::vec::Vec;

use crate::array::resolve_entry_array;
use crate::config::DecodeConfig;
use crate::entries::decode_entries;
use crate::error::{DecodeWarning, Result};
use crate::gpt::RawHeader;
use crate::locate::locate_header;
use crate::partition::PartitionDescriptor;
use crate::sector::{infer_sector_size, SectorSize};
use crate::source::ByteSource;

/// Outcome of a successful decode. Read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTable {
    /// Inferred bytes per LBA
    pub sector_size: SectorSize,
    /// Byte offset of the header within the buffer
    pub header_offset: usize,
    pub header: RawHeader,
    /// Disk LBA the buffer is taken to start at
    pub buffer_start_lba: u64,
    /// Byte offset of the entry array within the buffer
    pub entry_array_offset: usize,
    /// Bytes considered (after clamping to the search window)
    pub buffer_len: usize,
    /// Populated entries, in array order
    pub partitions: Vec<PartitionDescriptor>,
    pub warnings: Vec<DecodeWarning>,
}

impl DecodedTable {
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartitionDescriptor> {
        self.partitions.iter()
    }

    /// Partitions that get a flash descriptor line (non-zero size)
    pub fn flashable(&self) -> impl Iterator<Item = &PartitionDescriptor> {
        self.partitions.iter().filter(|p| p.is_flashable())
    }

    /// True if the buffer ended inside the entry array
    pub fn is_truncated(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, DecodeWarning::EntryArrayTruncated { .. }))
    }
}

/// Decode the GPT found in `bytes`.
///
/// Only the first `config.max_input_bytes` bytes are looked at. Fails with
/// `InputTooSmall` before scanning when fewer than 1024 bytes remain,
/// `HeaderNotFound` when no signature is found and `ArrayOutOfRange` when
/// the entry array lies past the buffer. See [`crate::error::DecodeError`].
pub fn decode(bytes: &[u8], config: &DecodeConfig) -> Result<DecodedTable> {
    let source = ByteSource::new(bytes, config);
    source.ensure_min_len()?;

    let located = locate_header(source.bytes())?;
    let header = located.header;

    let mut warnings = Vec::new();
    let sector_size = infer_sector_size(located.offset, header.current_lba, &mut warnings);

    let array = resolve_entry_array(
        &header,
        located.offset,
        sector_size,
        source.len(),
        &mut warnings,
    )?;

    let partitions = decode_entries(
        source.bytes(),
        &header,
        array.offset,
        sector_size,
        config.max_partitions,
        &mut warnings,
    );

    Ok(DecodedTable {
        sector_size,
        header_offset: located.offset,
        header,
        buffer_start_lba: array.buffer_start_lba,
        entry_array_offset: array.offset,
        buffer_len: source.len(),
        partitions,
        warnings,
    })
}
