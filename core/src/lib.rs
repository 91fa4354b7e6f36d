//! GPT prefix decoder
//!
//! Recovers the partition list of a GUID Partition Table from the first few
//! hundred KiB of a raw disk dump, without device access and without knowing
//! the sector size in advance.
//!
//! # Architecture
//!
//! Decoding is a linear pipeline of pure stages:
//! 1. **Source** - bounds the input buffer ([`source`])
//! 2. **Locate** - 512-byte stride scan for the `EFI PART` signature ([`locate`])
//! 3. **Sector size** - inferred from the header's own LBA ([`sector`])
//! 4. **Entry array** - buffer-relative offset of the partition entries ([`array`])
//! 5. **Entries** - record decoding into [`PartitionDescriptor`]s ([`entries`])
//!
//! The result ([`DecodedTable`]) can be rendered as a text report
//! ([`report`]) or as a rawprogram flash descriptor ([`rawprogram`]).
//!
//! # Usage
//!
//! ```ignore
//! use gptx::{decode, DecodeConfig};
//!
//! let table = decode(&image_prefix, &DecodeConfig::default())?;
//! for part in table.flashable() {
//!     println!("{} @ {} (+{})", part.name, part.start_lba, part.size_sectors);
//! }
//! ```

#![no_std]

extern crate alloc;

#[macro_use]
mod logging;

pub mod array;
pub mod config;
pub mod decode;
pub mod entries;
pub mod error;
pub mod gpt;
pub mod locate;
pub mod name;
pub mod partition;
pub mod rawprogram;
pub mod report;
pub mod sector;
pub mod source;

pub use config::DecodeConfig;
pub use decode::{decode, DecodedTable};
pub use error::{DecodeError, DecodeWarning, Result};
pub use gpt::{RawEntry, RawHeader};
pub use partition::{PartitionDescriptor, PartitionKind};
pub use sector::SectorSize;
pub use source::ByteSource;
