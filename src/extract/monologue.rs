use regex::Regex;
use std::sync::LazyLock;

use super::cleaner::collapse_whitespace;
use super::types::Entry;

/// Block header regexes (compiled once via LazyLock). The body of each block
/// is not part of the header match; it runs from the header's end to the
/// earliest terminator found by the matching `*_END` regex, or end of input.
static RE_DASHED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"---\s*MONOLOGUE[^\n]*---\s*\n(?:\s*[^\d\n][^\n]*\n)?\s*(\d+)\s+SCENARIO:[^\n]*\n=+\n")
        .unwrap()
});
static RE_DASHED_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n---|\n\n\d+\s").unwrap());

static RE_ITEM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"={10,}\nITEM\s+(\d+)\s*-\s*MONOLOGUE[^\n]*\nSource:[^\n]*\n={10,}\n").unwrap()
});
static RE_ITEM_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+={10,}\nITEM|\n---").unwrap());

static RE_SCENARIO_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+SCENARIO:[^\n]*\n=+\n").unwrap());
static RE_SCENARIO_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n---|\n\n\d+\s|\n={10,}\nITEM").unwrap());

/// A matched monologue block: entry number, body span, and the full span to
/// strip from the content afterwards.
#[derive(Debug)]
struct Block {
    number: u64,
    body: (usize, usize),
    span: (usize, usize),
}

impl Block {
    fn entry(&self, content: &str) -> Entry {
        Entry {
            number: self.number,
            text: collapse_whitespace(&content[self.body.0..self.body.1]),
        }
    }
}

fn body_end(content: &str, body_start: usize, terminator: &Regex) -> usize {
    terminator
        .find(&content[body_start..])
        .map(|m| body_start + m.start())
        .unwrap_or(content.len())
}

/// `--- MONOLOGUE ---` blocks: dashed header, an optional single metadata
/// line, a `N SCENARIO:` marker and its `=` border, then the body.
fn find_dashed_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut at = 0usize;
    while let Some(caps) = RE_DASHED_HEADER.captures_at(content, at) {
        let header = caps.get(0).unwrap();
        let number: u64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => {
                at = header.end();
                continue;
            }
        };
        let end = body_end(content, header.end(), &RE_DASHED_END);
        blocks.push(Block {
            number,
            body: (header.end(), end),
            span: (header.start(), end),
        });
        at = end;
    }
    blocks
}

/// `=== ITEM N - MONOLOGUE ===` blocks: equals-bordered ITEM header with a
/// `Source:` line, then anything up to the first scenario marker, then the
/// body. The entry number comes from the ITEM header, not the marker.
fn find_item_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut at = 0usize;
    while let Some(caps) = RE_ITEM_HEADER.captures_at(content, at) {
        let header = caps.get(0).unwrap();
        let number: u64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => {
                at = header.end();
                continue;
            }
        };
        let Some(marker) = RE_SCENARIO_MARK.find_at(content, header.end()) else {
            // no scenario marker anywhere past this header, so none past the
            // later headers either
            break;
        };
        let end = body_end(content, marker.end(), &RE_ITEM_END);
        blocks.push(Block {
            number,
            body: (marker.end(), end),
            span: (header.start(), end),
        });
        at = end;
    }
    blocks
}

/// Fallback: any standalone `N SCENARIO:` marker (mid-line or indented, not
/// at the start of a line) the two structural variants missed.
fn find_scenario_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut at = 0usize;
    while let Some(caps) = RE_SCENARIO_MARK.captures_at(content, at) {
        let m = caps.get(0).unwrap();
        if m.start() > 0 && content.as_bytes()[m.start() - 1] == b'\n' {
            // line-start markers belong to the structural variants
            at = m.start() + 1;
            continue;
        }
        let number: u64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => {
                at = m.end();
                continue;
            }
        };
        let end = body_end(content, m.end(), &RE_SCENARIO_END);
        blocks.push(Block {
            number,
            body: (m.end(), end),
            span: (m.start(), end),
        });
        at = end;
    }
    blocks
}

/// Splice out every block span, leaving a single newline in its place.
/// Spans are ascending and non-overlapping by construction.
fn remove_spans(content: &str, blocks: &[Block]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut at = 0usize;
    for b in blocks {
        out.push_str(&content[at..b.span.0]);
        out.push('\n');
        at = b.span.1;
    }
    out.push_str(&content[at..]);
    out
}

/// Extract every monologue block from `content` and strip the matched spans,
/// returning the new entries and the remaining content for the line scan.
///
/// Fallback markers whose number is already present, either in `seen` or in
/// the blocks found here, add no entry; their spans are still stripped.
pub fn extract_monologues(content: &str, seen: &[Entry]) -> (Vec<Entry>, String) {
    let dashed = find_dashed_blocks(content);
    let items = find_item_blocks(content);
    let fallback = find_scenario_blocks(content);

    let mut found: Vec<Entry> = Vec::new();
    for b in dashed.iter().chain(items.iter()) {
        found.push(b.entry(content));
    }
    for b in &fallback {
        let duplicate = seen
            .iter()
            .chain(found.iter())
            .any(|e| e.number == b.number);
        if !duplicate {
            found.push(b.entry(content));
        }
    }

    // strip in the same order the patterns matched, re-matching each pass
    // against the running result
    let remainder = remove_spans(content, &dashed);
    let remainder = remove_spans(&remainder, &find_item_blocks(&remainder));
    let remainder = remove_spans(&remainder, &find_scenario_blocks(&remainder));

    (found, remainder)
}
