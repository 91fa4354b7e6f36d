//! Synthetic GPT image builder
//!
//! Writes headers and entries at arbitrary byte offsets so tests can place
//! them where real tools never would.

pub struct TestEntry {
    pub slot: u32,
    pub name: Vec<u16>,
    pub start_lba: u64,
    pub end_lba: u64,
    pub type_guid: [u8; 16],
}

pub struct ImageBuilder {
    len: usize,
    header_offset: usize,
    current_lba: u64,
    partition_entry_lba: u64,
    num_entries: u32,
    entry_size: u32,
    array_offset: usize,
    entries: Vec<TestEntry>,
}

impl ImageBuilder {
    /// Canonical 512-byte layout: header at LBA 1, entries from LBA 2.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            header_offset: 512,
            current_lba: 1,
            partition_entry_lba: 2,
            num_entries: 128,
            entry_size: 128,
            array_offset: 1024,
            entries: Vec::new(),
        }
    }

    /// Place the header at `offset`, claiming to be at `current_lba`.
    pub fn header_at(mut self, offset: usize, current_lba: u64) -> Self {
        self.header_offset = offset;
        self.current_lba = current_lba;
        self
    }

    /// Entry array LBA declared by the header
    pub fn entry_lba(mut self, lba: u64) -> Self {
        self.partition_entry_lba = lba;
        self
    }

    pub fn entry_count(mut self, count: u32) -> Self {
        self.num_entries = count;
        self
    }

    pub fn entry_size(mut self, size: u32) -> Self {
        self.entry_size = size;
        self
    }

    /// Byte offset the entry records are physically written at
    pub fn array_at(mut self, offset: usize) -> Self {
        self.array_offset = offset;
        self
    }

    pub fn partition(self, slot: u32, name: &str, start_lba: u64, end_lba: u64) -> Self {
        let units = name.encode_utf16().collect();
        self.partition_units(slot, units, start_lba, end_lba)
    }

    pub fn partition_units(mut self, slot: u32, name: Vec<u16>, start_lba: u64, end_lba: u64) -> Self {
        self.entries.push(TestEntry {
            slot,
            name,
            start_lba,
            end_lba,
            // Microsoft basic data
            type_guid: [
                0xa2, 0xa0, 0xd0, 0xeb, 0xe5, 0xb9, 0x33, 0x44, 0x87, 0xc0, 0x68, 0xb6, 0xb7,
                0x26, 0x99, 0xc7,
            ],
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut data = vec![0u8; self.len];

        // Protective MBR signature, so offset 0 is not all zeros
        if self.len >= 512 {
            data[510] = 0x55;
            data[511] = 0xAA;
        }

        let h = self.header_offset;
        if h + 92 <= self.len {
            data[h..h + 8].copy_from_slice(b"EFI PART");
            data[h + 8..h + 12].copy_from_slice(&0x0001_0000u32.to_le_bytes());
            data[h + 12..h + 16].copy_from_slice(&92u32.to_le_bytes());
            data[h + 24..h + 32].copy_from_slice(&self.current_lba.to_le_bytes());
            data[h + 32..h + 40].copy_from_slice(&0xFFFFu64.to_le_bytes());
            data[h + 40..h + 48].copy_from_slice(&34u64.to_le_bytes());
            data[h + 48..h + 56].copy_from_slice(&0xFFDEu64.to_le_bytes());
            data[h + 56..h + 72].copy_from_slice(&[0x42; 16]);
            data[h + 72..h + 80].copy_from_slice(&self.partition_entry_lba.to_le_bytes());
            data[h + 80..h + 84].copy_from_slice(&self.num_entries.to_le_bytes());
            data[h + 84..h + 88].copy_from_slice(&self.entry_size.to_le_bytes());
        }

        for entry in &self.entries {
            let at = self.array_offset + entry.slot as usize * self.entry_size as usize;
            if at + 128 > self.len {
                continue;
            }
            data[at..at + 16].copy_from_slice(&entry.type_guid);
            data[at + 16..at + 32].copy_from_slice(&[entry.slot as u8 + 1; 16]);
            data[at + 32..at + 40].copy_from_slice(&entry.start_lba.to_le_bytes());
            data[at + 40..at + 48].copy_from_slice(&entry.end_lba.to_le_bytes());
            for (i, unit) in entry.name.iter().take(36).enumerate() {
                data[at + 56 + i * 2..at + 58 + i * 2].copy_from_slice(&unit.to_le_bytes());
            }
        }

        data
    }
}
