//! GPT partition table extractor
//!
//! Decodes the GPT at the start of a raw dump, prints it, and writes a
//! rawprogram XML for 9008 flashing tools.

mod args;
mod logger;

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use gptx::rawprogram::{render_rawprogram, RawprogramOptions};
use gptx::report::{HeaderReport, TableReport};
use gptx::{decode, DecodeConfig, DecodeError};

use args::Args;

#[derive(Debug)]
enum CliError {
    Open(PathBuf, io::Error),
    Read(PathBuf, io::Error),
    Decode(DecodeError),
    Render(fmt::Error),
    Write(PathBuf, io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Open(path, err) => {
                write!(f, "cannot open input file '{}': {}", path.display(), err)
            }
            CliError::Read(path, err) => write!(f, "cannot read '{}': {}", path.display(), err),
            CliError::Decode(err) => write!(f, "{}", err),
            CliError::Render(_) => write!(f, "cannot render rawprogram XML"),
            CliError::Write(path, err) => {
                write!(f, "cannot write output file '{}': {}", path.display(), err)
            }
        }
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        CliError::Decode(err)
    }
}

/// Read at most `limit` bytes from the start of `path`.
fn read_prefix(path: &Path, limit: usize) -> Result<Vec<u8>, CliError> {
    let file = File::open(path).map_err(|e| CliError::Open(path.to_path_buf(), e))?;
    let mut data = Vec::with_capacity(limit);
    file.take(limit as u64)
        .read_to_end(&mut data)
        .map_err(|e| CliError::Read(path.to_path_buf(), e))?;
    Ok(data)
}

fn unix_timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => format!("{} (unix time)", elapsed.as_secs()),
        Err(_) => String::from("unknown"),
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = DecodeConfig::default();

    println!("Input file: {}", args.input.display());
    println!("Physical partition number: {}", args.physical_partition);
    println!("Output XML: {}", args.output.display());
    println!();

    log::info!("Reading GPT partition table data");
    let data = read_prefix(&args.input, config.max_input_bytes)?;
    log::debug!("Read {} bytes", data.len());

    let table = decode(&data, &config)?;

    println!();
    print!("{}", HeaderReport(&table.header));
    println!();
    print!("{}", TableReport(&table));
    println!("Total valid partitions: {}", table.len());

    let generated = unix_timestamp();
    let options = RawprogramOptions {
        physical_partition: args.physical_partition,
        generated: Some(&generated),
    };
    let xml = render_rawprogram(&table, &options).map_err(CliError::Render)?;
    fs::write(&args.output, xml).map_err(|e| CliError::Write(args.output.clone(), e))?;

    println!();
    println!("Generated XML file: {}", args.output.display());
    println!("  Physical partition: {}", args.physical_partition);
    println!("  Sector size: {} bytes", table.sector_size);
    println!("  Partitions: {}", table.flashable().count());
    if table.is_truncated() {
        println!("  Note: input ended inside the partition entry array");
    }

    Ok(())
}

/// stderr text for a failed run, with the header dump when one was found
fn diagnostic(err: &CliError) -> String {
    let mut text = format!("ERROR: {}\n", err);
    if let CliError::Decode(decode_err) = err {
        if let Some(header) = decode_err.header() {
            text.push_str(&HeaderReport(header).to_string());
        }
    }
    text
}

fn main() -> ExitCode {
    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| String::from("gptx"));

    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            eprintln!("{}", args::usage(&program));
            return ExitCode::FAILURE;
        }
    };

    logger::init(args.verbose);

    println!("GPT Partition Table Parser v{}", env!("CARGO_PKG_VERSION"));
    println!("======================================");
    println!();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}
