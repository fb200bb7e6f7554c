//! Configuration types for line sampling CLI operations.

use std::path::PathBuf;

/// Configuration for one sampling run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// File whose lines are partitioned
    pub input: PathBuf,
    /// Destination of the randomly selected sample
    pub first_output: PathBuf,
    /// Destination of the remaining lines
    pub second_output: PathBuf,
    /// Number of lines to place in the first sample
    pub sample_size: usize,
}
