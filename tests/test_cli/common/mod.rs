use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Four terminated lines, the smallest input with interesting partitions
pub const SAMPLE_LINES: &[u8] = b"a\nb\nc\nd\n";

/// Temporary working directory with helpers to run the randsplit binary.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Creates a fixture with an initial file in its directory
    pub fn with_file(name: &str, data: &[u8]) -> Self {
        let fixture = Self::new();
        fixture.write_file(name, data);
        fixture
    }

    pub fn write_file(&self, name: &str, data: &[u8]) {
        fs::write(self.dir.path().join(name), data).expect("write fixture file");
    }

    pub fn read_file(&self, name: &str) -> Vec<u8> {
        fs::read(self.dir.path().join(name)).expect("read fixture file")
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Runs the randsplit binary with the given arguments, with the fixture
    /// directory as the working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_randsplit"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("run randsplit binary")
    }
}

/// Splits raw file bytes into terminator-inclusive line records.
pub fn lines(data: &[u8]) -> Vec<Vec<u8>> {
    data.split_inclusive(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}

/// Checks whether `candidate` is a subsequence of `full`, i.e. its records
/// appear in `full` in the same relative order.
pub fn is_subsequence(candidate: &[Vec<u8>], full: &[Vec<u8>]) -> bool {
    let mut remaining = full.iter();
    candidate
        .iter()
        .all(|record| remaining.any(|other| other == record))
}
