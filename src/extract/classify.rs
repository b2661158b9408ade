use regex::Regex;
use std::sync::LazyLock;

use super::types::LineClass;

/// Line shapes recognized by the classifier (compiled once via LazyLock).
/// The whole-line groups tolerate leading whitespace.
static RE_INLINE_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"---[^\n]*---").unwrap());
static RE_BORDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*=+\s*$").unwrap());
static RE_SCENARIO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s+SCENARIO:").unwrap());
static RE_SCRIPT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*Script:").unwrap());
static RE_SOURCE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*Source:").unwrap());
static RE_MUST_READ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*This must be read").unwrap());
static RE_SPEAKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Character\s*\d+:").unwrap());
static RE_ITEM_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*ITEM\s+\d+").unwrap());
static RE_ITEMS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*ITEMS\s+\d+-\d+").unwrap());
static RE_YOU_ARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*You are (?:playing|[A-Z];|Character)").unwrap());
static RE_NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\s+(.*)$").unwrap());

/// Structural remnants the strip rules leave behind; they end an entry but
/// stay in place for the scanner.
const HEADER_PREFIXES: [&str; 8] = [
    "===",
    "ITEM ",
    "ITEMS ",
    "Source:",
    "Script:",
    "Character ",
    "This must be read",
    "You are",
];

/// Classify one line of post-extraction content.
pub fn classify_line(raw: &str) -> LineClass {
    let line = RE_INLINE_DASHES.replace_all(raw, "");
    let trimmed = line.trim();

    if trimmed.is_empty()
        || RE_BORDER.is_match(&line)
        || RE_SCENARIO_LINE.is_match(&line)
        || RE_SCRIPT_LINE.is_match(&line)
        || RE_SOURCE_LINE.is_match(&line)
        || RE_MUST_READ.is_match(&line)
    {
        return LineClass::Blank;
    }
    if RE_SPEAKER.is_match(&line) {
        return LineClass::Speaker;
    }
    if RE_ITEM_LINE.is_match(&line) || RE_ITEMS_LINE.is_match(&line) || RE_YOU_ARE.is_match(&line)
    {
        return LineClass::Instruction;
    }
    if let Some(caps) = RE_NUMBERED.captures(&line) {
        if let Ok(number) = caps[1].parse() {
            return LineClass::Numbered {
                number,
                rest: caps[2].to_string(),
            };
        }
    }
    if line.starts_with("---") || HEADER_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return LineClass::Header;
    }
    LineClass::Text(trimmed.to_string())
}

pub fn classify_lines(content: &str) -> Vec<LineClass> {
    content.split('\n').map(classify_line).collect()
}
