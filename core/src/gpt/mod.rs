//! GPT on-disk layouts
//!
//! Header and partition entry records, decoded field by field from byte
//! slices. All integers are little-endian; GUIDs use the mixed-endian
//! on-disk form understood by [`uguid::Guid::from_bytes`].

pub mod entry;
pub mod header;

pub use entry::{RawEntry, ENTRY_SIZE, NAME_UNITS};
pub use header::{RawHeader, GPT_SIGNATURE, HEADER_SIZE};

/// Copy `N` bytes starting at `at`. Callers pass fixed-size records.
fn bytes_at<const N: usize>(data: &[u8], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[at..at + N]);
    out
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes(bytes_at(data, at))
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes_at(data, at))
}

fn le_u64(data: &[u8], at: usize) -> u64 {
    u64::from_le_bytes(bytes_at(data, at))
}

fn guid_at(data: &[u8], at: usize) -> uguid::Guid {
    uguid::Guid::from_bytes(bytes_at(data, at))
}
