//! Command line argument parsing for the randsplit utility.

use std::path::PathBuf;

use clap::Parser;

use sample_utils::CliConfig;

/// Randomly divide a file into two samples
///
/// randsplit takes a file and divides it randomly in two new files, the first
/// containing a uniform random sample of the specified number of lines, and
/// the second containing the rest of the original file. Line order within
/// each output follows the original file.
#[derive(Debug, Parser)]
#[command(
    name = "randsplit",
    version = "0.1.0",
    about = "Randomly divide a file's lines into a sample and its complement",
    long_about = "randsplit takes a file and divides it randomly in two new files, the first \
                 containing a uniform random sample of the specified number of lines, and the \
                 second containing the rest of the original file. Line order within each output \
                 follows the original file."
)]
pub struct RandSplitOpts {
    /// File to split
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// File to store the first sample
    #[arg(short = 'a', long = "first-sample", value_name = "FILE")]
    first: Option<PathBuf>,

    /// File to store the rest of the original file
    #[arg(short = 'b', long = "second-sample", value_name = "FILE")]
    second: Option<PathBuf>,

    /// Size of the first sample, in lines
    #[arg(short = 'n', long = "first-size", value_name = "LINES")]
    size: Option<usize>,
}

impl RandSplitOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the CLI configuration, or `None` when any required option is absent
    pub fn config(&self) -> Option<CliConfig> {
        Some(CliConfig {
            input: self.input.clone()?,
            first_output: self.first.clone()?,
            second_output: self.second.clone()?,
            sample_size: self.size?,
        })
    }
}
