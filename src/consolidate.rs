use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::extract::{self, clean_text, Entry};

/// Run the consolidation pass over `paths` and write the numbered output
/// file. Returns the number of lines written.
///
/// Entries accumulate across all files, are stable-sorted by number, and
/// deduplicated keeping the first occurrence. Cleanup happens after dedup, so
/// an entry whose text cleans to nothing still claims its number.
pub fn consolidate(paths: &[PathBuf], output: &Path) -> Result<usize> {
    let mut entries: Vec<Entry> = Vec::new();

    for path in paths {
        if !path.exists() {
            eprintln!(
                "{}",
                format!("Warning: {} not found, skipping", path.display()).yellow()
            );
            continue;
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let content = extract::normalize_newlines(&content);
        extract::collect_entries(&content, &mut entries);
    }

    entries.sort_by_key(|e| e.number);
    entries.dedup_by_key(|e| e.number);

    let mut lines = Vec::new();
    for entry in &entries {
        let cleaned = clean_text(&entry.text);
        if !cleaned.is_empty() {
            lines.push(format!("{}  {}", entry.number, cleaned));
        }
    }

    fs::write(output, lines.join("\n"))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(lines.len())
}
