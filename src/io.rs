//! File I/O for line records with exact terminator preservation.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads all lines of a file into memory.
///
/// Each record keeps its terminator exactly as found in the file (`\n` or
/// `\r\n`); a final line without a terminator becomes a record with none.
/// Concatenating the records reproduces the file byte for byte.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    loop {
        let mut line = Vec::new();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Writes line records to a file verbatim, overwriting any existing file.
///
/// Records are concatenated with no added separators, so output files are
/// exact byte subsequences of the original input.
pub fn write_lines(path: &Path, lines: &[Vec<u8>]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer.write_all(line)?;
    }
    writer.flush()?;

    Ok(())
}
