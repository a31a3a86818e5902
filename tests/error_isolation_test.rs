//! Integration tests for error isolation
//!
//! Tests that a broken question file is reported on its own and does not
//! stop the remaining files from being checked.

use kanji_dupcheck::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID: &str = r#"{"questions":[{"id":1,"question":"A","answer":"X"},{"id":2,"question":"B","answer":"X"}]}"#;

fn write_files(dir: &TempDir, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

fn run_text(sources: &[PathBuf]) -> (BatchOutcome, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = check_sources(sources, ReportFormat::Text, true, &mut out, &mut err).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

/// Test that invalid JSON is reported and the next file is still checked
#[test]
fn test_parse_error_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_files(
        &temp_dir,
        &[
            ("kanji_grade1.json", "{ this is not json"),
            ("kanji_grade2.json", VALID),
        ],
    );

    let (outcome, text) = run_text(&sources);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.checked, 1);
    assert!(text.contains(&format!("Error reading {}", sources[0].display())));
    assert!(text.contains(&format!("Checking: {}", sources[1].display())));
}

/// Test that a missing questions field is reported and the batch continues
#[test]
fn test_structure_error_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_files(
        &temp_dir,
        &[
            ("kanji_grade1.json", r#"{"quiz":[]}"#),
            ("kanji_grade2.json", VALID),
        ],
    );

    let (outcome, text) = run_text(&sources);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.with_duplicates, 1);
    assert!(text.contains(&format!(
        "Error: 'questions' field not found in {}",
        sources[0].display()
    )));
    assert!(text.contains("X (2 occurrences):"));
}

/// Test that a file deleted between scan and check is isolated
#[test]
fn test_missing_file_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let mut sources = write_files(&temp_dir, &[("kanji_grade2.json", VALID)]);
    sources.insert(0, temp_dir.path().join("kanji_grade1.json"));

    let (outcome, _) = run_text(&sources);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.checked, 1);
}

/// Test that every source is followed by a blank line in scan mode
#[test]
fn test_sources_are_separated() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_files(
        &temp_dir,
        &[
            ("kanji_grade1.json", r#"[]"#),
            ("kanji_grade2.json", r#"{"questions":[]}"#),
        ],
    );

    let (_, text) = run_text(&sources);
    let expected_first = format!(
        "Error: 'questions' field not found in {}\n\n",
        sources[0].display()
    );
    assert!(text.starts_with(&expected_first));
    assert!(text.ends_with("✓ No duplicate answers found!\n\n"));
}

/// Test that sources are processed in the order given
#[test]
fn test_sources_processed_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_files(
        &temp_dir,
        &[
            ("kanji_grade1.json", VALID),
            ("kanji_grade2.json", VALID),
            ("kanji_grade3.json", VALID),
        ],
    );

    let (outcome, text) = run_text(&sources);
    assert_eq!(outcome.checked, 3);

    let positions: Vec<usize> = sources
        .iter()
        .map(|p| text.find(&format!("Checking: {}", p.display())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
