//! Tests for the result-file writers

use triage::pipeline::ClassificationReport;
use triage::report::{write_evaluation_report, write_training_summary};

#[test]
fn test_training_summary_layout() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("results").join("train_accuracy.txt");

    write_training_summary(&path, 0.94186).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "accuracy=0.9419\n");
}

#[test]
fn test_evaluation_report_layout() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("results").join("evaluation.txt");

    let y_true = vec![0i64, 0, 1, 1, 1];
    let y_pred = vec![0i64, 1, 1, 1, 0];
    let report = ClassificationReport::compute(&y_true, &y_pred);

    write_evaluation_report(&path, &report).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Accuracy: 0.6000"));
    assert_eq!(lines.next(), Some(""), "Blank line separates the breakdown");
    assert!(contents.contains("precision"));
    assert!(contents.contains("macro avg"));
}

#[test]
fn test_writers_create_parent_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("report.txt");

    write_training_summary(&nested, 1.0).unwrap();
    assert!(nested.exists());
}
