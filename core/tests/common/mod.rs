//! Common test utilities: synthetic images and a memory block device

#![allow(dead_code)]

pub mod builder;
pub use builder::ImageBuilder;

use gpt_disk_io::{BlockIo, Disk};
use gpt_disk_types::{
    guid, BlockSize, GptHeader, GptPartitionEntryArray, GptPartitionType, Lba, LbaLe, U32Le,
};
use std::io;
use uguid::Guid;

/// In-memory block device over a borrowed buffer
#[derive(Debug)]
pub struct MemoryBlockDevice<'a> {
    pub data: &'a mut [u8],
    pub block_size: usize,
}

impl<'a> MemoryBlockDevice<'a> {
    pub fn new(data: &'a mut [u8], block_size: usize) -> Self {
        Self { data, block_size }
    }
}

impl BlockIo for MemoryBlockDevice<'_> {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write beyond end of device",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Build a disk image with gpt_disk_io's GPT writer.
///
/// Primary header at LBA 1, 128 entries from LBA 2, one basic data
/// partition per `(name, start, end)`.
pub fn reference_image(block_size: u32, num_blocks: u64, parts: &[(&str, u64, u64)]) -> Vec<u8> {
    let mut image = vec![0u8; block_size as usize * num_blocks as usize];

    {
        let device = MemoryBlockDevice::new(&mut image, block_size as usize);
        let mut disk = Disk::new(device).expect("disk handle");
        let bs = BlockSize::new(block_size).expect("valid block size");

        let entry_sectors = 16384 / block_size as u64;
        let mut header = GptHeader {
            my_lba: LbaLe::from_u64(1),
            alternate_lba: LbaLe::from_u64(num_blocks - 1),
            first_usable_lba: LbaLe::from_u64(2 + entry_sectors),
            last_usable_lba: LbaLe::from_u64(num_blocks - 2 - entry_sectors),
            disk_guid: guid!("12345678-1234-1234-1234-123456789012"),
            partition_entry_lba: LbaLe::from_u64(2),
            number_of_partition_entries: U32Le::from_u32(128),
            ..Default::default()
        };

        let layout = header
            .get_partition_entry_array_layout()
            .expect("entry array layout");
        let mut entry_buf = vec![0u8; 16384];
        let mut entry_array =
            GptPartitionEntryArray::new(layout, bs, &mut entry_buf).expect("entry array");

        for (i, (name, start, end)) in parts.iter().enumerate() {
            let entry = entry_array
                .get_partition_entry_mut(i as u32)
                .expect("entry slot");
            entry.partition_type_guid = GptPartitionType::BASIC_DATA;
            entry.unique_partition_guid = Guid::from_bytes([i as u8 + 1; 16]);
            entry.starting_lba = LbaLe::from_u64(*start);
            entry.ending_lba = LbaLe::from_u64(*end);
            entry.name = name.parse().expect("partition name");
        }

        header.partition_entry_array_crc32 = entry_array.calculate_crc32();
        header.update_header_crc32();

        let mut block = vec![0u8; block_size as usize];
        disk.write_protective_mbr(&mut block).expect("protective MBR");
        disk.write_primary_gpt_header(&header, &mut block)
            .expect("primary header");
        disk.write_gpt_partition_entry_array(&entry_array)
            .expect("entry array write");
        disk.flush().expect("flush");
    }

    image
}
