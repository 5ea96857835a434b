//! Loading term lists from plain-text files

use std::fs;
use std::path::Path;

use pubmed_pairwise::error::PairwiseError;
use pubmed_pairwise::query::{FragmentTemplate, combine};
use pubmed_pairwise::terms::{FileTermSource, TermSource};
use rstest::rstest;
use tempfile::TempDir;

fn write_terms(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write term file");
    path
}

#[rstest]
#[case::unix_newlines("one\ntwo\n", &["one", "two"])]
#[case::windows_newlines("one\r\ntwo\r\n", &["one", "two"])]
#[case::no_final_newline("one\ntwo", &["one", "two"])]
#[case::trailing_spaces("heading one   \nheading two\t\n", &["heading one", "heading two"])]
#[case::wildcards("first*\nsecond*\n", &["first*", "second*"])]
#[case::empty_file("", &[])]
fn test_term_file_parsing(#[case] contents: &str, #[case] expected: &[&str]) {
    let dir = TempDir::new().unwrap();
    let path = write_terms(&dir, "terms.txt", contents);

    let terms = FileTermSource.load(&path).unwrap();
    assert_eq!(terms.as_slice(), expected);
}

#[test]
fn test_missing_term_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let err = FileTermSource.load(&path).unwrap_err();
    match err {
        PairwiseError::TermFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Unexpected error: {other}"),
    }
}

#[test]
fn test_directory_is_not_a_term_file() {
    let dir = TempDir::new().unwrap();
    let err = FileTermSource.load(dir.path()).unwrap_err();
    assert!(matches!(err, PairwiseError::TermFile { .. }));
}

#[test]
fn test_files_to_mesh_query() {
    let dir = TempDir::new().unwrap();
    let headings = write_terms(&dir, "mesh.txt", "heading one\nheading two\n");
    let subheadings = write_terms(&dir, "sub.txt", "sub a\nsub b\n");

    let source = FileTermSource;
    let first = source.load(&headings).unwrap();
    let second = source.load(Path::new(&subheadings)).unwrap();

    assert_eq!(
        combine(first.as_slice(), second.as_slice(), &FragmentTemplate::Mesh),
        "heading one/sub a[mh] OR heading one/sub b[mh] OR heading two/sub a[mh] OR heading two/sub b[mh]"
    );
}
