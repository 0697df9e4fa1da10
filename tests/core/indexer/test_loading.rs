// Directory loading through the walker and loader

use crate::common::{create_test_services, TestRepo};
use context42::core::indexer::DocumentLoader;

fn default_loader() -> DocumentLoader {
    let services = create_test_services();
    services.create_loader(vec![], vec![]).unwrap()
}

#[test]
fn test_loads_text_files_in_sorted_order() {
    let repo = TestRepo::small();
    let report = default_loader().load_directory(repo.path()).unwrap();

    let names: Vec<&str> = report.documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["README.txt", "notes/cats.md", "notes/dogs.md", "src/main.rs"]
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn test_document_metadata() {
    let repo = TestRepo::with_files(&[("Notes.MD", "héllo")]);
    let report = default_loader().load_directory(repo.path()).unwrap();

    // default include patterns are case-sensitive globs
    assert!(report.documents.is_empty());

    let loader = DocumentLoader::new(vec![], vec![], 10).unwrap();
    let report = loader.load_directory(repo.path()).unwrap();
    let doc = &report.documents[0];
    assert_eq!(doc.name, "Notes.MD");
    assert_eq!(doc.size, 5);
    assert_eq!(doc.extension, "md");
}

#[test]
fn test_non_utf8_file_becomes_warning() {
    let mut repo = TestRepo::with_files(&[("good.txt", "fine")]);
    repo.add_bytes("bad.txt", &[0xff, 0xfe, 0x00, 0x80]);

    let report = default_loader().load_directory(repo.path()).unwrap();

    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.documents[0].name, "good.txt");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].path.ends_with("bad.txt"));
    assert_eq!(report.warnings[0].reason, "not valid UTF-8 text");
}

#[test]
fn test_oversized_file_is_reported() {
    let big = "a".repeat(1024 * 1024 + 1);
    let repo = TestRepo::with_files(&[("big.txt", big.as_str()), ("small.txt", "ok")]);

    let loader = DocumentLoader::new(vec!["*.txt".to_string()], vec![], 1).unwrap();
    let report = loader.load_directory(repo.path()).unwrap();

    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].path.ends_with("big.txt"));
}

#[test]
fn test_empty_file_is_a_document() {
    let repo = TestRepo::with_files(&[("empty.txt", "")]);
    let report = default_loader().load_directory(repo.path()).unwrap();

    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.documents[0].size, 0);
}

#[test]
fn test_missing_root_is_invalid_path() {
    let repo = TestRepo::with_files(&[("a.txt", "x")]);
    let err = default_loader()
        .load_directory(&repo.path().join("nope"))
        .unwrap_err();
    assert!(err.is_not_found());

    let err = default_loader()
        .load_directory(&repo.files[0])
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_custom_exclude_pattern() {
    let repo = TestRepo::small();
    let loader = DocumentLoader::new(
        vec!["*.md".to_string()],
        vec!["**/dogs.md".to_string()],
        10,
    )
    .unwrap();

    let report = loader.load_directory(repo.path()).unwrap();
    let names: Vec<&str> = report.documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["notes/cats.md"]);
}
