//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_filter;
use super::{CliError, FilterCommand, StrategyArg};

/// Two triangles joined by the single bridge `3 4`.
pub(super) const BRIDGED_TRIANGLES: &str = "1 2 3\n2 3\n3 4\n4 5 6\n5 6\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_pair_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn filter_command(pairs: PathBuf, strategy: StrategyArg) -> FilterCommand {
    FilterCommand {
        pairs,
        strategy,
        pruned_pairs: None,
    }
}

pub(super) fn run_filter_expecting_error(cmd: FilterCommand, panic_msg: &str) -> CliError {
    match run_filter(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
