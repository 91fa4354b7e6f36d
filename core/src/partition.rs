// Partition descriptors

use alloc::string::String;
use gpt_disk_types::{guid, GptPartitionType};

use crate::gpt::RawEntry;
use crate::name::decode_ascii_lossy;
use crate::sector::SectorSize;

const LINUX_FILESYSTEM: GptPartitionType =
    GptPartitionType(guid!("0fc63daf-8483-4772-8e79-3d69d8477de4"));
const LINUX_SWAP: GptPartitionType =
    GptPartitionType(guid!("0657fd6d-a4ab-43c4-84e5-0933c84b4f4f"));

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartitionKind {
    EfiSystem,
    LinuxFilesystem,
    LinuxSwap,
    BasicData,
    Unknown,
}

impl PartitionKind {
    /// Classify a GPT partition type GUID
    pub fn from_gpt_type(partition_type: &GptPartitionType) -> Self {
        if partition_type == &GptPartitionType::EFI_SYSTEM {
            PartitionKind::EfiSystem
        } else if partition_type == &GptPartitionType::BASIC_DATA {
            PartitionKind::BasicData
        } else if partition_type == &LINUX_FILESYSTEM {
            PartitionKind::LinuxFilesystem
        } else if partition_type == &LINUX_SWAP {
            PartitionKind::LinuxSwap
        } else {
            PartitionKind::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PartitionKind::EfiSystem => "EFI System",
            PartitionKind::LinuxFilesystem => "Linux FS",
            PartitionKind::LinuxSwap => "Linux Swap",
            PartitionKind::BasicData => "Basic Data",
            PartitionKind::Unknown => "Unknown",
        }
    }
}

/// One populated entry of the partition array, normalized.
///
/// Sizes are computed with wrapping arithmetic and never validated: an
/// entry whose ending LBA is below its starting LBA gets a huge wrapped
/// `size_sectors` rather than being rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionDescriptor {
    /// Slot in the entry array this came from
    pub index: u32,
    pub name: String,
    pub start_lba: u64,
    pub end_lba: u64,
    /// `end_lba - start_lba + 1`, wrapping
    pub size_sectors: u64,
    /// `size_sectors * sector_size / 1024`, wrapping multiply
    pub size_kib: u64,
    pub partition_type: GptPartitionType,
    pub kind: PartitionKind,
    pub is_valid: bool,
}

impl PartitionDescriptor {
    pub fn from_entry(index: u32, entry: &RawEntry, sector_size: SectorSize) -> Self {
        let size_sectors = sector_count(entry.starting_lba, entry.ending_lba);

        Self {
            index,
            name: decode_ascii_lossy(&entry.partition_name),
            start_lba: entry.starting_lba,
            end_lba: entry.ending_lba,
            size_sectors,
            size_kib: size_kib(size_sectors, sector_size),
            partition_type: entry.partition_type_guid,
            kind: PartitionKind::from_gpt_type(&entry.partition_type_guid),
            is_valid: true,
        }
    }

    /// Whether a flash descriptor line should be emitted for this partition
    pub fn is_flashable(&self) -> bool {
        self.is_valid && self.size_sectors > 0
    }
}

/// Inclusive LBA range length, wrapping
pub fn sector_count(start_lba: u64, end_lba: u64) -> u64 {
    end_lba.wrapping_sub(start_lba).wrapping_add(1)
}

/// Size in KiB, truncating
pub fn size_kib(sectors: u64, sector_size: SectorSize) -> u64 {
    sector_size.wrapping_bytes(sectors) / 1024
}
