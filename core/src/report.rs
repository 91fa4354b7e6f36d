//! Text reports
//!
//! Console renderings of a decoded table. Both types implement
//! [`core::fmt::Display`] so callers pick the sink.

use core::fmt;

use crate::decode::DecodedTable;
use crate::gpt::RawHeader;

const TABLE_RULE: &str = "--------------------------------------------------------------------------------";
const TABLE_END: &str = "================================================================================";

/// Header field dump
pub struct HeaderReport<'a>(pub &'a RawHeader);

impl fmt::Display for HeaderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0;
        writeln!(f, "========== GPT Header Info ==========")?;
        writeln!(f, "Signature: {}", h.signature_str())?;
        writeln!(f, "Revision: 0x{:08X}", h.revision)?;
        writeln!(f, "Header size: {} bytes", h.header_size)?;
        writeln!(f, "Current LBA: {}", h.current_lba)?;
        writeln!(f, "Backup LBA: {}", h.backup_lba)?;
        writeln!(f, "First usable LBA: {}", h.first_usable_lba)?;
        writeln!(f, "Last usable LBA: {}", h.last_usable_lba)?;
        writeln!(f, "Disk GUID: {}", h.disk_guid)?;
        writeln!(f, "Partition entry LBA: {}", h.partition_entry_lba)?;
        writeln!(f, "Number of entries: {}", h.num_partition_entries)?;
        writeln!(f, "Entry size: {} bytes", h.partition_entry_size)?;
        writeln!(f, "=====================================")
    }
}

/// Fixed-width partition listing
pub struct TableReport<'a>(pub &'a DecodedTable);

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Partition Table ==========")?;
        writeln!(
            f,
            "{:<4} {:<20} {:<12} {:<12} {:<12} {:<10} {}",
            "No.", "Name", "Start LBA", "End LBA", "Sectors", "Size(KB)", "Type"
        )?;
        writeln!(f, "{}", TABLE_RULE)?;

        for (i, part) in self.0.iter().enumerate().filter(|(_, p)| p.is_valid) {
            writeln!(
                f,
                "{:<4} {:<20} {:<12} {:<12} {:<12} {:<10} {}",
                i + 1,
                part.name,
                part.start_lba,
                part.end_lba,
                part.size_sectors,
                part.size_kib,
                part.kind.name()
            )?;
        }

        writeln!(f, "{}", TABLE_END)
    }
}
