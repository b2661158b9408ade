use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use colored::Colorize;
use regex::{Captures, Regex};

use crate::files;

/// A line-leading number and the single whitespace character after it.
static RE_LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\d+)(\s)").unwrap());

/// Add `offset` to every line-leading number in one file, in place. The
/// separator character and the rest of the line are untouched.
pub fn renumber_file(path: &Path, offset: u64) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let renumbered = RE_LINE_NUMBER.replace_all(&content, |caps: &Captures| {
        match caps[1].parse::<u64>() {
            Ok(number) => format!("{}{}", number + offset, &caps[2]),
            Err(_) => caps[0].to_string(),
        }
    });

    fs::write(path, renumbered.as_ref())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Renumber every file whose filename index is at or past `start_index`.
/// Files without a numeric suffix are skipped. Returns the processed count.
pub fn renumber(paths: &[PathBuf], offset: u64, start_index: u64) -> Result<usize> {
    let mut processed = 0usize;
    for path in paths {
        match files::file_index(path) {
            Some(index) if index >= start_index => {
                renumber_file(path, offset)?;
                println!("{}", format!("Processed: {}", path.display()).green());
                processed += 1;
            }
            _ => {}
        }
    }
    Ok(processed)
}
