mod classify;
mod cleaner;
mod collector;
mod monologue;
mod types;

pub use classify::{classify_line, classify_lines};
pub use cleaner::{clean_text, collapse_whitespace};
pub use collector::collect_numbered;
pub use monologue::extract_monologues;
pub use types::{Entry, LineClass};

/// Unify CRLF and lone CR line endings to LF.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Gather every entry one file's content yields: monologue blocks first,
/// then the per-line scan over what remains of the content.
pub fn collect_entries(content: &str, entries: &mut Vec<Entry>) {
    let (blocks, remainder) = extract_monologues(content, entries);
    entries.extend(blocks);
    entries.extend(collect_numbered(&classify_lines(&remainder)));
}
