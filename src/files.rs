use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use glob::glob;
use regex::Regex;

/// Numeric suffix of an assignment filename, e.g. `actor_assignments12.txt`.
static RE_FILE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"actor_assignments(\d+)\.txt").unwrap());

/// List the files matching `pattern` inside `dir`, sorted by filename.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = dir.join(pattern);
    let full = full.to_string_lossy();
    let mut paths: Vec<PathBuf> = glob(&full)
        .with_context(|| format!("Invalid glob pattern {full}"))?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Parse the numeric suffix out of an assignment filename, if it has one.
pub fn file_index(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    let caps = RE_FILE_INDEX.captures(name)?;
    caps[1].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_index_parses_suffix() {
        assert_eq!(file_index(Path::new("/tmp/actor_assignments8.txt")), Some(8));
        assert_eq!(file_index(Path::new("actor_assignments012.txt")), Some(12));
        assert_eq!(file_index(Path::new("actor_assignments.txt")), None);
        assert_eq!(file_index(Path::new("actor_assignments_extra.txt")), None);
    }
}
