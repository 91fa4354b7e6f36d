//! Sector size inference
//!
//! A GPT header records its own LBA but not the sector size. Where the
//! header sits in the buffer, divided by that LBA, gives the size.

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU64;

use crate::error::DecodeWarning;

/// Size assumed when the header gives nothing to divide by
pub const DEFAULT_SECTOR_SIZE: u64 = 512;

/// Bytes per logical block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectorSize(NonZeroU64);

impl SectorSize {
    /// 512-byte sectors
    pub const DEFAULT: Self = match NonZeroU64::new(DEFAULT_SECTOR_SIZE) {
        Some(size) => Self(size),
        None => panic!("default sector size is zero"),
    };

    pub fn new(bytes: u64) -> Option<Self> {
        NonZeroU64::new(bytes).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Byte count of `sectors` sectors, wrapping on overflow
    pub fn wrapping_bytes(self, sectors: u64) -> u64 {
        sectors.wrapping_mul(self.get())
    }
}

impl Default for SectorSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SectorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Infer the sector size from where a header was found.
///
/// `header_offset / current_lba`, truncating. A zero LBA, or a quotient of
/// zero (header closer to the buffer start than its own LBA allows), falls
/// back to 512. Never fails; fallbacks and truncation are recorded in
/// `warnings`.
pub fn infer_sector_size(
    header_offset: usize,
    current_lba: u64,
    warnings: &mut Vec<DecodeWarning>,
) -> SectorSize {
    let offset = header_offset as u64;

    let inferred = offset.checked_div(current_lba).and_then(SectorSize::new);
    let Some(sector_size) = inferred else {
        warn!(
            "Current LBA is {} at offset {}, assuming sector size {}",
            current_lba, header_offset, DEFAULT_SECTOR_SIZE
        );
        warnings.push(DecodeWarning::SectorSizeDefaulted { current_lba, header_offset });
        return SectorSize::DEFAULT;
    };

    if offset % current_lba != 0 {
        warn!(
            "Header offset {} is not a multiple of LBA {}, sector size truncated to {}",
            header_offset, current_lba, sector_size
        );
        warnings.push(DecodeWarning::SectorSizeTruncated {
            header_offset,
            current_lba,
            sector_size: sector_size.get(),
        });
    }

    info!("Detected sector size: {} bytes", sector_size);
    sector_size
}
