// Integration tests for the rename engine module

use std::fs;
use std::path::Path;

use rollover::rename_engine::{compute, RenameEngine, RewriteOptions, YearWindow};
use rollover::{RolloverError, Selection};

fn options(use_year: bool, use_suffix: bool) -> RewriteOptions {
    RewriteOptions {
        use_year,
        use_suffix,
        target_year: "2025".to_string(),
        suffix: " (my suffix)".to_string(),
    }
}

fn single(name: &str) -> Selection {
    vec![(name.to_string(), true)].into_iter().collect()
}

fn proposed_for(name: &str, use_year: bool, use_suffix: bool) -> String {
    let output = tempfile::tempdir().unwrap();
    let engine = RenameEngine::new(options(use_year, use_suffix))
        .unwrap()
        .with_window(YearWindow::around(2025));
    let mapping = engine.compute(&single(name), output.path()).unwrap();
    mapping.get(name).unwrap().to_string()
}

#[test]
fn test_rename_year() {
    let cases = [
        ("important_work_2024.xlsx", "important_work_2025.xlsx"),
        ("important_work_2024_2023.xlsx", "important_work__ (2025).xlsx"),
        ("report2024.xlsx", "report2025.xlsx"),
        ("report12345.xlsx", "report12345 (2025).xlsx"),
        ("report1234.xlsx", "report1234 (2025).xlsx"),
    ];
    for (input, expected) in cases {
        assert_eq!(proposed_for(input, true, false), expected, "input: {}", input);
    }
}

#[test]
fn test_suffix() {
    let cases = [
        ("important_work_2024.xlsx", "important_work_2024 (my suffix).xlsx"),
        ("important_work_2024_2023.xlsx", "important_work_2024_2023 (my suffix).xlsx"),
        ("report2024.xlsx", "report2024 (my suffix).xlsx"),
        ("report12345.xlsx", "report12345 (my suffix).xlsx"),
        ("report1234.xlsx", "report1234 (my suffix).xlsx"),
    ];
    for (input, expected) in cases {
        assert_eq!(proposed_for(input, false, true), expected, "input: {}", input);
    }
}

#[test]
fn test_rename_year_and_suffix() {
    let cases = [
        ("important_work_2024.xlsx", "important_work_2025 (my suffix).xlsx"),
        ("important_work_2024_2023.xlsx", "important_work__ (2025) (my suffix).xlsx"),
        ("report2024.xlsx", "report2025 (my suffix).xlsx"),
        ("report12345.xlsx", "report12345 (2025) (my suffix).xlsx"),
        ("report1234.xlsx", "report1234 (2025) (my suffix).xlsx"),
    ];
    for (input, expected) in cases {
        assert_eq!(proposed_for(input, true, true), expected, "input: {}", input);
    }
}

#[test]
fn test_existing_destination_is_skipped() {
    let output = tempfile::tempdir().unwrap();
    fs::write(output.path().join("a_2025.txt"), b"already here").unwrap();

    let selection: Selection = vec![
        ("a_2024.txt".to_string(), true),
        ("b_2024.txt".to_string(), true),
    ]
    .into_iter()
    .collect();
    let engine = RenameEngine::new(options(true, false))
        .unwrap()
        .with_window(YearWindow::around(2025));

    let mapping = engine.compute(&selection, output.path()).unwrap();
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("a_2024.txt"), None);
    assert_eq!(mapping.get("b_2024.txt"), Some("b_2025.txt"));
}

#[test]
fn test_only_selected_files_are_mapped() {
    let output = tempfile::tempdir().unwrap();
    let selection: Selection = vec![
        ("keep.txt".to_string(), true),
        ("drop.txt".to_string(), false),
    ]
    .into_iter()
    .collect();

    let mapping = compute(&selection, &options(false, true), output.path()).unwrap();
    let originals: Vec<_> = mapping.iter().map(|entry| entry.original.as_str()).collect();
    assert_eq!(originals, vec!["keep.txt"]);
}

#[test]
fn test_same_proposed_name_first_wins() {
    let output = tempfile::tempdir().unwrap();
    let selection: Selection = vec![
        ("budget_2023.xlsx".to_string(), true),
        ("budget_2024.xlsx".to_string(), true),
    ]
    .into_iter()
    .collect();
    let engine = RenameEngine::new(options(true, false))
        .unwrap()
        .with_window(YearWindow::around(2025));

    let mapping = engine.compute(&selection, output.path()).unwrap();
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("budget_2023.xlsx"), Some("budget_2025.xlsx"));
}

#[test]
fn test_mapping_values_are_bare_names() {
    let output = tempfile::tempdir().unwrap();
    let selection: Selection = vec![("photo_2020.jpg".to_string(), true)].into_iter().collect();

    let mapping = compute(&selection, &options(true, true), output.path()).unwrap();
    for entry in mapping.iter() {
        assert_eq!(Path::new(&entry.proposed).file_name().unwrap(), entry.proposed.as_str());
    }
}

#[test]
fn test_missing_output_folder_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let result = compute(&single("a.txt"), &options(false, true), &missing);
    assert!(matches!(result, Err(RolloverError::FolderNotFound(_))));
}

#[test]
fn test_mapping_serializes_in_order() {
    let output = tempfile::tempdir().unwrap();
    let selection: Selection = vec![
        ("b.txt".to_string(), true),
        ("a.txt".to_string(), true),
    ]
    .into_iter()
    .collect();

    let mapping = compute(&selection, &options(false, true), output.path()).unwrap();
    let json = serde_json::to_value(&mapping).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "original": "b.txt", "proposed": "b (my suffix).txt" },
            { "original": "a.txt", "proposed": "a (my suffix).txt" },
        ])
    );
}

#[test]
fn test_separator_in_raw_options_is_rejected() {
    let output = tempfile::tempdir().unwrap();
    let options = RewriteOptions {
        use_suffix: true,
        suffix: "/../../evil".to_string(),
        ..Default::default()
    };

    let result = compute(&single("a.txt"), &options, output.path());
    assert!(matches!(result, Err(RolloverError::Config(_))));
}
