use std::fs;
use std::path::{Path, PathBuf};

// Helper to create an assignment file inside the test directory
fn write_assignments(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn renumber_dir(dir: &Path, offset: u64, start_index: u64) -> usize {
    let paths = script_lines::files::discover(dir, "actor_assignments*.txt")
        .expect("Failed to discover test files");
    script_lines::renumber::renumber(&paths, offset, start_index).expect("Renumbering failed")
}

#[cfg(test)]
mod renumber_tests {
    use super::*;

    #[test]
    fn test_offset_applied_to_line_numbers() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_assignments(
            dir.path(),
            "actor_assignments8.txt",
            "5 Hello world\n10 Another line\nno number here\n",
        );

        let processed = renumber_dir(dir.path(), 612, 8);
        assert_eq!(processed, 1);
        assert_eq!(
            fs::read_to_string(&path).expect("Failed to read back"),
            "617 Hello world\n622 Another line\nno number here\n"
        );
    }

    #[test]
    fn test_start_index_filters_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let early = write_assignments(dir.path(), "actor_assignments7.txt", "5 untouched\n");
        let late = write_assignments(dir.path(), "actor_assignments8.txt", "5 shifted\n");

        let processed = renumber_dir(dir.path(), 612, 8);
        assert_eq!(processed, 1, "Only the file at the start index should change");
        assert_eq!(fs::read_to_string(&early).unwrap(), "5 untouched\n");
        assert_eq!(fs::read_to_string(&late).unwrap(), "617 shifted\n");
    }

    #[test]
    fn test_files_without_numeric_suffix_are_skipped() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let odd = write_assignments(dir.path(), "actor_assignments_extra.txt", "5 untouched\n");

        let processed = renumber_dir(dir.path(), 612, 0);
        assert_eq!(processed, 0);
        assert_eq!(fs::read_to_string(&odd).unwrap(), "5 untouched\n");
    }

    #[test]
    fn test_separator_and_rest_of_line_preserved() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_assignments(
            dir.path(),
            "actor_assignments1.txt",
            "5\tTabbed line\n7 Two  spaced  words\n",
        );

        renumber_dir(dir.path(), 100, 0);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "105\tTabbed line\n107 Two  spaced  words\n"
        );
    }

    #[test]
    fn test_indented_numbers_are_left_alone() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_assignments(
            dir.path(),
            "actor_assignments1.txt",
            "  5 indented stays\n5 column zero shifts\n",
        );

        renumber_dir(dir.path(), 10, 0);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "  5 indented stays\n15 column zero shifts\n"
        );
    }
}
