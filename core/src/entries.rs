//! Partition entry array decoding
//!
//! Walks the entry array slot by slot. Running out of buffer is not an
//! error: whatever was decoded up to that point is the result.

use alloc::vec::Vec;

use crate::error::DecodeWarning;
use crate::gpt::{RawEntry, RawHeader, ENTRY_SIZE};
use crate::partition::PartitionDescriptor;
use crate::sector::SectorSize;

/// Decode the populated entries of the array at `array_offset`.
///
/// Slots are `partition_entry_size` bytes apart; at most
/// `min(num_partition_entries, max_partitions)` are visited. A slot that
/// does not fit in `bytes` ends the walk. All-zero slots are skipped.
/// Output keeps array order.
pub fn decode_entries(
    bytes: &[u8],
    header: &RawHeader,
    array_offset: usize,
    sector_size: SectorSize,
    max_partitions: usize,
    warnings: &mut Vec<DecodeWarning>,
) -> Vec<PartitionDescriptor> {
    let stride = header.partition_entry_size as usize;
    // A record is always ENTRY_SIZE bytes, even if the header declares less
    let span = stride.max(ENTRY_SIZE);
    let declared = header.num_partition_entries;
    let limit = (declared as usize).min(max_partitions);

    let mut partitions = Vec::new();

    for index in 0..limit {
        let Some(entry_offset) = index
            .checked_mul(stride)
            .and_then(|rel| rel.checked_add(array_offset))
        else {
            warnings.push(truncated(index, usize::MAX));
            return partitions;
        };

        let record = entry_offset
            .checked_add(span)
            .filter(|&end| end <= bytes.len())
            .and_then(|_| bytes.get(entry_offset..entry_offset + ENTRY_SIZE));
        let Some(record) = record else {
            warn!("Reached end of data at entry {}, stopping", index);
            warnings.push(truncated(index, entry_offset));
            return partitions;
        };

        if RawEntry::is_unused(record) {
            continue;
        }

        if let Some(entry) = RawEntry::parse(record) {
            let desc = PartitionDescriptor::from_entry(index as u32, &entry, sector_size);
            debug!(
                "Entry {}: '{}' LBA {}..={} ({} sectors)",
                index, desc.name, desc.start_lba, desc.end_lba, desc.size_sectors
            );
            partitions.push(desc);
        }
    }

    if declared as usize > max_partitions {
        warn!(
            "Header declares {} entries, capped at {}",
            declared, max_partitions
        );
        warnings.push(DecodeWarning::CapacityReached {
            declared,
            limit: max_partitions,
        });
    }

    info!("Parsed {} partitions", partitions.len());
    partitions
}

fn truncated(index: usize, offset: usize) -> DecodeWarning {
    DecodeWarning::EntryArrayTruncated {
        index: index as u32,
        offset,
    }
}
