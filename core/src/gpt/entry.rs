// GPT partition entry

use gpt_disk_types::GptPartitionType;
use uguid::Guid;

use super::{guid_at, le_u16, le_u64};

/// Size of one decoded entry record
pub const ENTRY_SIZE: usize = 128;

/// UTF-16LE code units in the name field
pub const NAME_UNITS: usize = 36;

const NAME_OFFSET: usize = 56;

/// One slot of the partition entry array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry {
    pub partition_type_guid: GptPartitionType,
    pub unique_partition_guid: Guid,
    pub starting_lba: u64,
    pub ending_lba: u64,
    /// Not interpreted
    pub attributes: u64,
    /// Raw UTF-16LE code units, zero padded
    pub partition_name: [u16; NAME_UNITS],
}

impl RawEntry {
    /// Decode an entry from the start of `data` (needs [`ENTRY_SIZE`] bytes).
    pub fn parse(data: &[u8]) -> Option<Self> {
        let data = data.get(..ENTRY_SIZE)?;

        let mut partition_name = [0u16; NAME_UNITS];
        for (i, unit) in partition_name.iter_mut().enumerate() {
            *unit = le_u16(data, NAME_OFFSET + i * 2);
        }

        Some(Self {
            partition_type_guid: GptPartitionType(guid_at(data, 0)),
            unique_partition_guid: guid_at(data, 16),
            starting_lba: le_u64(data, 32),
            ending_lba: le_u64(data, 40),
            attributes: le_u64(data, 48),
            partition_name,
        })
    }

    /// An all-zero record marks an unused slot.
    ///
    /// Only the raw bytes decide; a zero type GUID with other fields set
    /// still counts as populated.
    pub fn is_unused(record: &[u8]) -> bool {
        record.iter().all(|&b| b == 0)
    }
}
