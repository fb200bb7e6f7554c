//! Random line sampling utility
//!
//! Takes a file and divides it randomly in two new files: the first contains
//! a random sample of the specified size, and the second contains the rest
//! of the original file.

use std::process;

mod opts;

use clap::CommandFactory;
use opts::RandSplitOpts;

use sample_utils::run_cli;

const PROGRAM_NAME: &str = "randsplit";

fn main() -> std::io::Result<()> {
    let opts = RandSplitOpts::parse();

    let Some(config) = opts.config() else {
        // A missing required option is a no-op help request, not a failure.
        RandSplitOpts::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{err}");
        process::exit(1);
    }

    Ok(())
}
