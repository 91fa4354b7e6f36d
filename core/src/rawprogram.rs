//! Rawprogram flash descriptor
//!
//! Emits the `rawprogram*.xml` layout consumed by 9008 (EDL) flashing
//! tools: one `<program>` line for the primary GPT image followed by one
//! line per partition with a non-zero size.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::decode::DecodedTable;

/// Sectors written for the primary GPT image (MBR, header, 32 entry sectors)
pub const PRIMARY_GPT_SECTORS: u64 = 34;

/// Emitter settings
#[derive(Debug, Clone, Copy, Default)]
pub struct RawprogramOptions<'a> {
    /// `physical_partition_number` of every line (the UFS LUN)
    pub physical_partition: u32,
    /// Free-form generation note; the line is omitted when `None`
    pub generated: Option<&'a str>,
}

/// Default output name for a physical partition, `rawprogram{N}.xml`
pub fn default_file_name(physical_partition: u32) -> String {
    format!("rawprogram{}.xml", physical_partition)
}

/// Write the descriptor for `table` into `out`.
pub fn write_rawprogram<W: Write>(
    out: &mut W,
    table: &DecodedTable,
    options: &RawprogramOptions<'_>,
) -> fmt::Result {
    let phys = options.physical_partition;
    let sector_size = table.sector_size;

    writeln!(out, "<?xml version=\"1.0\" ?>")?;
    writeln!(out, "<data>")?;
    writeln!(out, "  <!--")?;
    writeln!(out, "    Auto-generated 9008 flash configuration")?;
    if let Some(generated) = options.generated {
        writeln!(out, "    Generated: {}", generated)?;
    }
    writeln!(out, "    Physical partition number: {}", phys)?;
    writeln!(out, "    Sector Size: {} bytes", sector_size)?;
    writeln!(out, "    ")?;
    writeln!(out, "    Usage:")?;
    writeln!(out, "    1. Prepare partition image files (.img)")?;
    writeln!(out, "    2. Name files as: partition_name.img")?;
    writeln!(out, "    3. Use QFIL tool to flash with this config")?;
    writeln!(out, "  -->")?;
    writeln!(out)?;

    writeln!(
        out,
        "  <program filename=\"gpt_main{phys}.bin\" label=\"PrimaryGPT\" SECTOR_SIZE_IN_BYTES=\"{ss}\" file_sector_offset=\"0\" num_partition_sectors=\"{n}\" physical_partition_number=\"{phys}\" start_sector=\"0\" />",
        phys = phys,
        ss = sector_size,
        n = PRIMARY_GPT_SECTORS,
    )?;
    writeln!(out)?;

    for part in table.flashable() {
        let name = XmlAttr(&part.name);
        writeln!(
            out,
            "  <program filename=\"{name}.img\" label=\"{name}\" SECTOR_SIZE_IN_BYTES=\"{ss}\" file_sector_offset=\"0\" num_partition_sectors=\"{n}\" physical_partition_number=\"{phys}\" start_sector=\"{start}\" />",
            name = name,
            ss = sector_size,
            n = part.size_sectors,
            phys = phys,
            start = part.start_lba,
        )?;
    }

    writeln!(out, "</data>")
}

/// Render the descriptor to a string
pub fn render_rawprogram(
    table: &DecodedTable,
    options: &RawprogramOptions<'_>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_rawprogram(&mut out, table, options)?;
    Ok(out)
}

/// Attribute-value escaping.
///
/// Tab, LF and CR become character references so attribute normalization
/// keeps them. Other C0 controls are not legal XML 1.0 characters at all and
/// are replaced with `?`.
struct XmlAttr<'a>(&'a str);

impl fmt::Display for XmlAttr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '\t' | '\n' | '\r' => write!(f, "&#x{:X};", c as u32)?,
                c if c < ' ' => f.write_char('?')?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
