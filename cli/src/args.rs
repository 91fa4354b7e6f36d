//! Command line parsing

use std::fmt;
use std::path::PathBuf;

use gptx::rawprogram::default_file_name;

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    /// UFS LUN written into every rawprogram line
    pub physical_partition: u32,
    pub output: PathBuf,
    pub verbose: bool,
}

/// Bad invocation; the caller prints [`usage`] after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingInput,
    BadPartitionNumber(String),
    UnexpectedArgument(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingInput => write!(f, "missing GPT file argument"),
            UsageError::BadPartitionNumber(arg) => {
                write!(f, "invalid physical partition number '{}'", arg)
            }
            UsageError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{}'", arg),
        }
    }
}

impl Args {
    /// Parse everything after the program name.
    ///
    /// Positionals are `<GPT_file> [physical_partition_number] [output_XML]`;
    /// `-v`/`--verbose` may appear anywhere.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut verbose = false;
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let input = positional.next().ok_or(UsageError::MissingInput)?;

        let physical_partition = match positional.next() {
            Some(arg) => arg
                .parse::<u32>()
                .map_err(|_| UsageError::BadPartitionNumber(arg))?,
            None => 0,
        };

        let output = positional
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(default_file_name(physical_partition)));

        if let Some(extra) = positional.next() {
            return Err(UsageError::UnexpectedArgument(extra));
        }

        Ok(Self {
            input: PathBuf::from(input),
            physical_partition,
            output,
            verbose,
        })
    }
}

/// Usage text for `program`
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {p} [-v] <GPT_file> [physical_partition_number] [output_XML]\n\
         Example: {p} gpt_main4.bin 4\n\
         Example: {p} gpt_main4.bin 4 rawprogram4.xml\n\
         \n\
         Default physical_partition_number: 0\n\
         Default output: rawprogram<N>.xml",
        p = program
    )
}
