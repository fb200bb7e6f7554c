//! High-level orchestration: read, sample, write.

use std::io;

use crate::config::CliConfig;
use crate::error::Result;
use crate::io::{read_lines, write_lines};
use crate::operations::sample;

/// Runs one sampling pass according to the CLI configuration.
///
/// The sample size is validated against the input length before either
/// output file is created, so an out-of-range size never leaves partial
/// output behind.
pub fn process_file(config: &CliConfig) -> Result<()> {
    let lines = read_lines(&config.input)?;

    let mut rng = rand::thread_rng();
    let (first, second) = sample(lines, config.sample_size, &mut rng)?;

    write_lines(&config.first_output, &first)?;
    write_lines(&config.second_output, &second)?;

    Ok(())
}

/// Runs the CLI command with error context.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<()> {
    process_file(config).map_err(|err| {
        io::Error::other(format!("{program}: {}: {err}", config.input.display()))
    })
}
