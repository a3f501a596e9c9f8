//! Integration tests for `tenet_validator::validate_docs`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tenet::corpus::ReadFailureKind;
use tenet_validator::output::write_human;
use tenet_validator::{PrincipleResult, ScanConfig, ValidationReport, validate_docs};

fn config_for(root: &Path) -> ScanConfig {
    let mut config = ScanConfig::default();
    config.root = root.to_path_buf();
    config
}

/// Lay out a documentation tree that satisfies all eight principles.
fn write_passing_tree(root: &Path) {
    fs::write(
        root.join("intro.md"),
        "# Introduction\n\nThis research study cites sources and references.\n",
    )
    .unwrap();

    for idx in 1..=3 {
        let chapter = root.join(format!("chapter-0{idx}"));
        fs::create_dir(&chapter).unwrap();
        fs::write(
            chapter.join("index.md"),
            "# Agent planning\n\nSafety and ethics notes with a tool analysis.\n",
        )
        .unwrap();
        fs::write(
            chapter.join("details.md"),
            "```mermaid\ngraph TD;\n```\n\n```bash\nls\n```\n\n```bash\npwd\n```\n",
        )
        .unwrap();
    }
}

fn result_named<'a>(report: &'a ValidationReport, name: &str) -> &'a PrincipleResult {
    report
        .results
        .iter()
        .find(|result| result.name == name)
        .unwrap_or_else(|| panic!("no principle named {name}"))
}

#[test]
fn test_validate_docs_nonexistent_root_errors() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does_not_exist");

    let result = validate_docs(&config_for(&missing));
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("does not exist"), "got: {msg}");
}

#[test]
fn test_validate_docs_root_must_be_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("docs.md");
    fs::write(&file, "# Not a directory").unwrap();

    let result = validate_docs(&config_for(&file));
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("not a directory"), "got: {msg}");
}

#[test]
fn test_validate_docs_empty_root() {
    let tmp = TempDir::new().unwrap();

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert!(!report.ok);
    assert_eq!(report.scanned_documents, 0);
    assert_eq!(report.results.len(), 8);
    // Only format compatibility passes vacuously on an empty tree.
    assert_eq!(report.passed_count(), 1);
    assert!(result_named(&report, "Output Format Compatibility").passed);
}

#[test]
fn test_validate_docs_passing_tree() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert!(
        report.ok,
        "expected all principles to pass, got: {:?}",
        report.results
    );
    assert_eq!(report.scanned_documents, 7);
    assert_eq!(report.passed_count(), 8);
    assert!(report.read_failures.is_empty());
    assert_eq!(report.root, tmp.path());
}

#[test]
fn test_validate_docs_missing_intro_fails_structure() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    fs::remove_file(tmp.path().join("intro.md")).unwrap();

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert!(!report.ok);
    let structure = result_named(&report, "Structured Documentation Format");
    assert!(!structure.passed);
    assert_eq!(structure.message, "Found 3 chapter directories and intro: no");
}

#[test]
fn test_validate_docs_exclude_narrows_corpus_not_layout() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());

    let mut config = config_for(tmp.path());
    config.exclude = vec!["details.md".to_owned()];
    let report = validate_docs(&config).unwrap();

    // The diagram/snippet files are gone from the corpus...
    assert_eq!(report.scanned_documents, 4);
    assert!(!result_named(&report, "Visual Aids & Practical Examples").passed);
    // ...but the layout snapshot still sees both files per chapter.
    assert!(result_named(&report, "Modular & Extensible Documentation").passed);
    assert!(report.read_failures.is_empty());
}

#[test]
fn test_validate_docs_loads_mdx_documents() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    fs::write(tmp.path().join("interactive.mdx"), "# Interactive page\n").unwrap();

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert_eq!(report.scanned_documents, 8);
    assert!(report.ok);
}

#[test]
fn test_validate_docs_ignores_non_markdown_files() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    fs::write(tmp.path().join("logo.png"), [0_u8, 1, 2]).unwrap();
    fs::write(tmp.path().join("notes.txt"), "plain text").unwrap();

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert_eq!(report.scanned_documents, 7);
    assert!(report.read_failures.is_empty());
}

#[test]
fn test_validate_docs_unreadable_file_fails_format_principle() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    fs::write(tmp.path().join("broken.md"), [0xFF_u8, 0xFE, 0x01]).unwrap();

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    assert!(!report.ok);
    assert_eq!(report.read_failures.len(), 1);
    assert_eq!(report.read_failures[0].kind, ReadFailureKind::InvalidEncoding);

    let format = result_named(&report, "Output Format Compatibility");
    assert!(!format.passed);
    assert_eq!(format.message, "1 file(s) could not be read as text");
    // Content principles still see the readable documents.
    assert!(result_named(&report, "Content Accuracy & Research-Based Approach").passed);
}

#[test]
fn test_validate_docs_oversized_file_is_a_read_failure() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    fs::write(tmp.path().join("huge.md"), "x".repeat(4096)).unwrap();

    let mut config = config_for(tmp.path());
    config.max_file_size = 1024;
    let report = validate_docs(&config).unwrap();

    assert!(!report.ok);
    assert_eq!(report.read_failures.len(), 1);
    assert_eq!(report.read_failures[0].kind, ReadFailureKind::TooLarge);
}

#[test]
fn test_validate_docs_max_files_truncates_scan() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());

    let mut config = config_for(tmp.path());
    config.max_files = 2;
    let report = validate_docs(&config).unwrap();

    assert_eq!(report.scanned_documents, 2);
    assert_eq!(report.read_failures.len(), 1);
    assert_eq!(report.read_failures[0].kind, ReadFailureKind::LimitExceeded);
    assert!(!result_named(&report, "Output Format Compatibility").passed);
}

#[test]
fn test_validate_docs_json_report_contract() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());

    let report = validate_docs(&config_for(tmp.path())).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("root").is_some());
    assert_eq!(value["scanned_documents"], 7);
    assert_eq!(value["ok"], true);
    assert_eq!(value["results"].as_array().unwrap().len(), 8);
    assert!(value["read_failures"].as_array().unwrap().is_empty());

    let first = &value["results"][0];
    assert_eq!(first["name"], "Content Accuracy & Research-Based Approach");
    assert_eq!(first["passed"], true);
    assert!(first["message"].is_string());
}

#[test]
fn test_validate_docs_output_is_stable_across_runs() {
    let tmp = TempDir::new().unwrap();
    write_passing_tree(tmp.path());
    let config = config_for(tmp.path());

    let mut first = Vec::new();
    write_human(&validate_docs(&config).unwrap(), &mut first).unwrap();
    let mut second = Vec::new();
    write_human(&validate_docs(&config).unwrap(), &mut second).unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("TENET DOCUMENTATION VALIDATOR"));
    assert!(text.contains("Summary: 8/8 principles validated"));
    assert!(text.contains("All 8 principles validated successfully"));
}
