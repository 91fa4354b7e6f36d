// GPT header

use uguid::Guid;

use super::{bytes_at, guid_at, le_u32, le_u64};

/// Header signature, "EFI PART"
pub const GPT_SIGNATURE: &[u8; 8] = b"EFI PART";

/// Bytes of the header that are decoded (the rest of its sector is reserved)
pub const HEADER_SIZE: usize = 92;

/// Primary or backup GPT header as found in the image.
///
/// Checksums are carried but never verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub signature: [u8; 8],
    pub revision: u32,
    pub header_size: u32,
    pub header_crc32: u32,
    pub reserved: u32,
    /// LBA this header claims to live at
    pub current_lba: u64,
    pub backup_lba: u64,
    pub first_usable_lba: u64,
    pub last_usable_lba: u64,
    pub disk_guid: Guid,
    /// Disk-absolute LBA of the partition entry array
    pub partition_entry_lba: u64,
    pub num_partition_entries: u32,
    pub partition_entry_size: u32,
    pub partition_array_crc32: u32,
}

impl RawHeader {
    /// Check the first 8 bytes of `data` against the signature.
    pub fn has_signature(data: &[u8]) -> bool {
        data.get(..GPT_SIGNATURE.len()) == Some(&GPT_SIGNATURE[..])
    }

    /// Decode a header from the start of `data`.
    ///
    /// Returns `None` only when fewer than [`HEADER_SIZE`] bytes are given;
    /// the signature is not checked here.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let data = data.get(..HEADER_SIZE)?;

        Some(Self {
            signature: bytes_at(data, 0),
            revision: le_u32(data, 8),
            header_size: le_u32(data, 12),
            header_crc32: le_u32(data, 16),
            reserved: le_u32(data, 20),
            current_lba: le_u64(data, 24),
            backup_lba: le_u64(data, 32),
            first_usable_lba: le_u64(data, 40),
            last_usable_lba: le_u64(data, 48),
            disk_guid: guid_at(data, 56),
            partition_entry_lba: le_u64(data, 72),
            num_partition_entries: le_u32(data, 80),
            partition_entry_size: le_u32(data, 84),
            partition_array_crc32: le_u32(data, 88),
        })
    }

    pub fn is_signature_valid(&self) -> bool {
        &self.signature == GPT_SIGNATURE
    }

    /// Signature as text, for reports
    pub fn signature_str(&self) -> &str {
        core::str::from_utf8(&self.signature).unwrap_or("????????")
    }
}
