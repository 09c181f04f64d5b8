//! Integration tests for the filesystem glue: ingest a directory, run the
//! batch, export CSV and organize files.

use std::fs;
use std::io::Write;
use std::path::Path;

use triage_rs::batch::BatchRunner;
use triage_rs::export::{organize_emails, save_csv};
use triage_rs::ingest::load_directory;
use triage_rs::report::Aggregator;
use triage_rs::rules::{Category, RuleSet};

fn write_email(dir: &Path, name: &str, content: &str) {
    let mut file = fs::File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn test_directory_to_report() {
    let dir = tempfile::tempdir().unwrap();
    write_email(dir.path(), "001.txt", "Subject: fostering\nI want to foster a dog");
    write_email(dir.path(), "002.txt", "We have space for a kitten");
    write_email(dir.path(), "003.txt", "");
    write_email(dir.path(), "ignore.csv", "not,an,email");

    let rules = RuleSet::builtin();
    let files = load_directory(dir.path()).unwrap();
    assert_eq!(files.len(), 3);

    let records: Vec<_> = files.iter().map(|f| f.record.clone()).collect();
    let results = BatchRunner::new(&rules).run(&records);
    assert_eq!(results[0].email_id, "001.txt");
    assert_eq!(results[0].category, Category::DogFoster);
    assert_eq!(results[1].category, Category::CatFoster);
    assert_eq!(results[2].category, Category::Uncategorized);

    let report = Aggregator::new(&rules).aggregate(&results, "it");
    assert_eq!(report.total, 3);
    assert_eq!(report.uncategorized, 1);
    // Builtin categories all present, even with zero matches.
    assert_eq!(report.rows.len(), rules.len() + 1);
}

#[test]
fn test_csv_export_from_directory_batch() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_email(dir.path(), "a.txt", "puppy application");

    let rules = RuleSet::builtin();
    let files = load_directory(dir.path()).unwrap();
    let records: Vec<_> = files.iter().map(|f| f.record.clone()).collect();
    let results = BatchRunner::new(&rules).run(&records);
    let report = Aggregator::new(&rules).aggregate(&results, "csvtest");

    let path = save_csv(&report, out.path()).unwrap();
    let content = fs::read_to_string(path).unwrap();

    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("category,count,percentage"));
    assert!(content.contains("DOG_FOSTER,1,100.0"));
    assert!(content.contains("TOTAL,1,100.0"));
}

#[test]
fn test_organize_mirrors_batch_decisions() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_email(dir.path(), "dog.txt", "dog");
    write_email(dir.path(), "event.txt", "community festival");

    let rules = RuleSet::builtin();
    let files = load_directory(dir.path()).unwrap();
    let records: Vec<_> = files.iter().map(|f| f.record.clone()).collect();
    let results = BatchRunner::new(&rules).run(&records);

    let placed = organize_emails(&files, &results, out.path()).unwrap();
    assert_eq!(placed, 2);
    assert!(out.path().join("DOG_FOSTER/dog.txt").exists());
    assert!(out.path().join("EVENTS/event.txt").exists());
}
