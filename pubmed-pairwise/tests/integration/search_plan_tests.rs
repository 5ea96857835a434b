//! Running YAML search plans against term files on disk

use std::fs;

use pubmed_pairwise::error::PairwiseError;
use pubmed_pairwise::link::search_url;
use pubmed_pairwise::plan::{JobKind, SearchPlan};
use pubmed_pairwise::terms::FileTermSource;
use tempfile::TempDir;

const PLAN: &str = r#"
proximity:
  field: tiab
  distance: 2
jobs:
  - name: mesh
    kind: mesh
    first: mesh_terms.txt
    second: subheadings.txt
  - name: keywords near
    kind: proximity
    first: keywords_a.txt
    second: keywords_b.txt
  - name: keywords and
    kind: intersection
    first: keywords_a.txt
    second: keywords_b.txt
"#;

fn plan_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        ("plan.yaml", PLAN),
        ("mesh_terms.txt", "heading one\nheading two\n"),
        ("subheadings.txt", "sub a\nsub b\n"),
        ("keywords_a.txt", "one\n"),
        ("keywords_b.txt", "four\nfive\n"),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[test]
fn test_plan_runs_all_jobs_in_order() {
    let dir = plan_dir();
    let plan = SearchPlan::from_file(dir.path().join("plan.yaml")).unwrap();
    let results = plan.run(&FileTermSource).unwrap();

    let kinds: Vec<JobKind> = results.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![JobKind::Mesh, JobKind::Proximity, JobKind::Intersection]
    );

    assert_eq!(
        results[0].query,
        "heading one/sub a[mh] OR heading one/sub b[mh] OR heading two/sub a[mh] OR heading two/sub b[mh]"
    );
    assert_eq!(
        results[1].query,
        "\"one four\"[tiab:~2] OR \"one five\"[tiab:~2]"
    );
    assert_eq!(
        results[1].spreadsheet.as_deref(),
        Some("\"\"\"one four\"\"[tiab:~2] OR \"\"\"one five\"\"[tiab:~2]")
    );
    assert_eq!(results[2].query, "(one AND four) OR (one AND five)");

    for result in &results {
        assert_eq!(result.url, search_url(&result.query));
    }
}

#[test]
fn test_plan_with_missing_term_file() {
    let dir = plan_dir();
    fs::remove_file(dir.path().join("subheadings.txt")).unwrap();

    let plan = SearchPlan::from_file(dir.path().join("plan.yaml")).unwrap();
    let err = plan.run(&FileTermSource).unwrap_err();
    assert!(matches!(err, PairwiseError::TermFile { .. }));
}

#[test]
fn test_missing_plan_file() {
    let dir = TempDir::new().unwrap();
    let err = SearchPlan::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, PairwiseError::PlanFile { .. }));
}

#[test]
fn test_malformed_plan_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.yaml");
    fs::write(&path, "jobs: [this is not a job").unwrap();

    let err = SearchPlan::from_file(&path).unwrap_err();
    assert!(matches!(err, PairwiseError::PlanParse(_)));
}
