use regex::Regex;
use std::sync::LazyLock;

/// Cleanup rule regexes (compiled once via LazyLock).
static RE_CHARACTER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Character\s*\d+:\s*").unwrap());
static RE_CODED_ROLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][A-Za-z\s]+:\s*[A-Z]?\d+:\s*").unwrap());
static RE_ROLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s]+:\s*").unwrap());
static RE_EQUALS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*={5,}\s*").unwrap());
static RE_DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-{5,}\s*").unwrap());

/// Metadata markers; entry text is cut at the earliest one present.
const TRUNCATION_MARKERS: [&str; 6] = [
    "ITEMS ",
    "ITEM ",
    "You are B;",
    "You are A;",
    "You are Character",
    "You are playing a customer service agent",
];

/// Remove `Character N:` labels anywhere in the text.
pub fn strip_character_labels(text: &str) -> String {
    RE_CHARACTER_LABEL.replace_all(text, "").into_owned()
}

/// Remove `Role Name: D2:` style labels (role followed by a coded id) anywhere.
pub fn strip_coded_role_labels(text: &str) -> String {
    RE_CODED_ROLE.replace_all(text, "").into_owned()
}

/// Remove a plain `Role Name:` label, start of text only.
pub fn strip_role_prefix(text: &str) -> String {
    RE_ROLE_PREFIX.replace(text, "").into_owned()
}

/// Cut the text at the earliest truncation marker, if any occurs.
pub fn truncate_at_markers(text: &str) -> &str {
    match TRUNCATION_MARKERS.iter().filter_map(|m| text.find(m)).min() {
        Some(cut) => &text[..cut],
        None => text,
    }
}

/// Collapse leftover `=====` / `-----` section rules into a single space.
pub fn collapse_section_rules(text: &str) -> String {
    let text = RE_EQUALS_RUN.replace_all(text, " ");
    RE_DASH_RUN.replace_all(&text, " ").into_owned()
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Apply the full cleanup pipeline in order. Bracketed direction tags like
/// `[apologetically]` pass through untouched.
pub fn clean_text(text: &str) -> String {
    let text = strip_character_labels(text);
    let text = strip_coded_role_labels(&text);
    let text = strip_role_prefix(&text);
    let text = truncate_at_markers(&text);
    let text = collapse_section_rules(text);
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_labels_removed_anywhere() {
        assert_eq!(
            strip_character_labels("Character 2: hello Character3: there"),
            "hello there"
        );
    }

    #[test]
    fn coded_role_labels_removed() {
        assert_eq!(
            strip_coded_role_labels("Customer Support: D2: How can I help"),
            "How can I help"
        );
    }

    #[test]
    fn role_prefix_only_at_start() {
        assert_eq!(strip_role_prefix("Narrator: once upon a time"), "once upon a time");
        assert_eq!(
            strip_role_prefix("once upon a time, Narrator: said"),
            "once upon a time, Narrator: said"
        );
    }

    #[test]
    fn truncates_at_earliest_marker() {
        assert_eq!(
            truncate_at_markers("Go now. You are A; continue the scene."),
            "Go now. "
        );
        assert_eq!(
            truncate_at_markers("one ITEM 5 two You are B; three"),
            "one "
        );
        assert_eq!(truncate_at_markers("no markers here"), "no markers here");
    }

    #[test]
    fn section_rules_collapsed() {
        assert_eq!(collapse_section_rules("before ===== after"), "before after");
        assert_eq!(collapse_section_rules("before ----- after"), "before after");
        // short runs stay; they may be legitimate punctuation
        assert_eq!(collapse_section_rules("a --- b"), "a --- b");
    }

    #[test]
    fn clean_text_keeps_direction_tags() {
        assert_eq!(
            clean_text("Narrator: Welcome to the show [apologetically]"),
            "Welcome to the show [apologetically]"
        );
    }

    #[test]
    fn clean_text_truncation_example() {
        assert_eq!(clean_text("Go now. You are A; continue the scene."), "Go now.");
    }

    #[test]
    fn clean_text_is_idempotent() {
        let samples = [
            "Narrator: Welcome to the show [apologetically]",
            "Character 2: Go now. You are A; continue the scene.",
            "Customer Support: D2: ===== your call matters",
            "  plain   text\twith  gaps  ",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "cleaning {:?} twice changed it", s);
        }
    }
}
