//! Common CLI utilities and shared functionality for random line sampling.

mod config;
mod error;
mod io;
mod operations;
mod process;


pub use config::CliConfig;
pub use error::{Error, Result};
pub use io::{read_lines, write_lines};
pub use operations::sample;
pub use process::{process_file, run_cli};
