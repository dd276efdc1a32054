//! End-to-end generation tests: answers in, README.md on disk out.

use std::fs;

use tempfile::TempDir;

use readmate::{emit, render, AnswerSet, License};

fn sample_answers() -> AnswerSet {
    AnswerSet {
        title: "Demo".to_string(),
        description: "A demo.".to_string(),
        installation: "npm install".to_string(),
        usage: "run it".to_string(),
        contributing: "Jane".to_string(),
        tests: "none".to_string(),
        license: Some(License::Mit),
        username: "janedoe".to_string(),
        email: "jane@example.com".to_string(),
    }
}

#[test]
fn test_generate_and_write_readme() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    let document = render::generate_readme(&sample_answers());
    emit::write_readme(&path, &document).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, document);
    assert!(written.starts_with("# Demo\n"));
    assert!(written.contains("MIT"));
    assert!(written.contains("[janedoe](https://github.com/janedoe)"));
}

#[test]
fn test_regeneration_overwrites_previous_readme() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    let first = render::generate_readme(&sample_answers());
    emit::write_readme(&path, &first).unwrap();

    let mut answers = sample_answers();
    answers.title = "Demo v2".to_string();
    answers.license = None;
    let second = render::generate_readme(&answers);
    emit::write_readme(&path, &second).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, second);
    assert!(written.starts_with("# Demo v2\n"));
    assert!(!written.contains("MIT"));
}

#[test]
fn test_every_license_choice_renders_a_badge() {
    for license in License::ALL {
        let mut answers = sample_answers();
        answers.license = Some(license);
        let document = render::generate_readme(&answers);
        assert!(document.contains("img.shields.io"));
        assert!(document.contains(license.name()));
    }
}
