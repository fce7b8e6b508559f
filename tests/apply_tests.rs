// Integration tests for copying a rename mapping into the output folder

use std::fs;

use rollover::rename_engine::{RenameEngine, RewriteOptions, YearWindow};
use rollover::{apply_rename, RolloverError, Selection};

fn year_engine() -> RenameEngine {
    let options = RewriteOptions {
        use_year: true,
        target_year: "2025".to_string(),
        ..Default::default()
    };
    RenameEngine::new(options)
        .unwrap()
        .with_window(YearWindow::around(2025))
}

#[test]
fn test_apply_copies_and_keeps_sources() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("invoice_2024.pdf"), b"invoice body").unwrap();
    fs::write(input.path().join("notes.txt"), b"notes body").unwrap();

    let selection = Selection::from_directory(input.path()).unwrap();
    let mapping = year_engine().compute(&selection, output.path()).unwrap();
    let report = apply_rename(&mapping, input.path(), output.path()).unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(
        fs::read(output.path().join("invoice_2025.pdf")).unwrap(),
        b"invoice body"
    );
    assert_eq!(
        fs::read(output.path().join("notes (2025).txt")).unwrap(),
        b"notes body"
    );
    assert!(input.path().join("invoice_2024.pdf").exists());
    assert!(input.path().join("notes.txt").exists());
}

#[test]
fn test_second_run_skips_created_files() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("plan_2024.docx"), b"plan").unwrap();

    let selection = Selection::from_directory(input.path()).unwrap();
    let engine = year_engine();

    let first = engine.compute(&selection, output.path()).unwrap();
    apply_rename(&first, input.path(), output.path()).unwrap();

    let second = engine.compute(&selection, output.path()).unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_reapplying_same_mapping_fails_instead_of_overwriting() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("plan_2024.docx"), b"plan").unwrap();

    let selection = Selection::from_directory(input.path()).unwrap();
    let mapping = year_engine().compute(&selection, output.path()).unwrap();
    apply_rename(&mapping, input.path(), output.path()).unwrap();

    fs::write(output.path().join("plan_2025.docx"), b"edited").unwrap();
    let result = apply_rename(&mapping, input.path(), output.path());

    assert!(matches!(result, Err(RolloverError::Copy { .. })));
    assert_eq!(fs::read(output.path().join("plan_2025.docx")).unwrap(), b"edited");
}

#[test]
fn test_missing_source_stops_batch_and_keeps_earlier_copies() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a_2024.txt"), b"a").unwrap();
    fs::write(input.path().join("b_2024.txt"), b"b").unwrap();
    fs::write(input.path().join("c_2024.txt"), b"c").unwrap();

    let selection = Selection::from_directory(input.path()).unwrap();
    let mapping = year_engine().compute(&selection, output.path()).unwrap();
    fs::remove_file(input.path().join("b_2024.txt")).unwrap();

    let err = apply_rename(&mapping, input.path(), output.path()).unwrap_err();
    match err {
        RolloverError::Copy { from, to, .. } => {
            assert!(from.ends_with("b_2024.txt"));
            assert!(to.ends_with("b_2025.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(output.path().join("a_2025.txt").exists());
    assert!(!output.path().join("c_2025.txt").exists());
}
