//! End-to-end pairwise query generation across all search styles

use pubmed_pairwise::config::ProximityConfig;
use pubmed_pairwise::link::{PUBMED_SEARCH_URL, search_url};
use pubmed_pairwise::query::{
    FragmentTemplate, Pair, PairwiseQuery, ProximityQueries, build_pairs, combine, join_with_or,
};
use rstest::rstest;

#[rstest]
#[case::mesh(FragmentTemplate::Mesh, ("heading one", "subheading one"), "heading one/subheading one[mh]")]
#[case::proximity_engine(
    FragmentTemplate::proximity("tiab", 2),
    ("one", "four"),
    "\"one four\"[tiab:~2]"
)]
#[case::proximity_spreadsheet(
    FragmentTemplate::proximity_spreadsheet(2),
    ("one", "four"),
    "\"\"\"one four\"\"[tiab:~2]"
)]
#[case::intersection(FragmentTemplate::Intersection, ("first*", "fourth*"), "(first* AND fourth*)")]
fn test_fragment_templates(
    #[case] template: FragmentTemplate,
    #[case] pair: (&str, &str),
    #[case] expected: &str,
) {
    let pair = Pair::new(pair.0, pair.1);
    assert_eq!(template.format(&pair), expected);
}

#[rstest]
#[case::both_empty(0, 0)]
#[case::first_empty(0, 3)]
#[case::second_empty(4, 0)]
#[case::single(1, 1)]
#[case::rectangular(3, 5)]
fn test_pair_count_is_product(#[case] m: usize, #[case] n: usize) {
    let a: Vec<String> = (0..m).map(|i| format!("a{i}")).collect();
    let b: Vec<String> = (0..n).map(|j| format!("b{j}")).collect();

    let pairs = build_pairs(&a, &b);
    assert_eq!(pairs.len(), m * n);
    for i in 0..m {
        for j in 0..n {
            assert_eq!(pairs[i * n + j].as_tuple(), (a[i].as_str(), b[j].as_str()));
        }
    }
}

#[rstest]
#[case::empty(&[], "")]
#[case::single(&["x"], "x")]
#[case::two(&["x", "y"], "x OR y")]
fn test_join_with_or(#[case] fragments: &[&str], #[case] expected: &str) {
    assert_eq!(join_with_or(fragments), expected);
}

#[test]
fn test_mesh_scenario() {
    let headings = ["heading one", "heading two"];
    let subheadings = ["sub a", "sub b"];

    assert_eq!(
        combine(&headings, &subheadings, &FragmentTemplate::Mesh),
        "heading one/sub a[mh] OR heading one/sub b[mh] OR heading two/sub a[mh] OR heading two/sub b[mh]"
    );
}

#[test]
fn test_proximity_scenario_with_custom_config() {
    let config = ProximityConfig::new().with_field("ti").with_distance(0);
    let queries = ProximityQueries::build(&["gene", "protein"], &["expression"], &config);

    assert_eq!(
        queries.engine,
        "\"gene expression\"[ti:~0] OR \"protein expression\"[ti:~0]"
    );
    assert_eq!(
        queries.spreadsheet,
        "\"\"\"gene expression\"\"[tiab:~0] OR \"\"\"protein expression\"\"[tiab:~0]"
    );
}

#[test]
fn test_intersection_builder_matches_combine() {
    let a = ["first*", "second*"];
    let b = ["third*", "fourth*"];
    let built = PairwiseQuery::intersection().first(&a).second(&b).build();

    assert_eq!(built, combine(&a, &b, &FragmentTemplate::Intersection));
    assert_eq!(
        built,
        "(first* AND third*) OR (first* AND fourth*) OR (second* AND third*) OR (second* AND fourth*)"
    );
}

#[test]
fn test_search_url_replaces_only_spaces() {
    assert_eq!(search_url("a b"), format!("{PUBMED_SEARCH_URL}a+b"));

    let url = PairwiseQuery::proximity("tiab", 2)
        .first(&["one"])
        .second(&["four"])
        .search_url();
    assert_eq!(url, format!("{PUBMED_SEARCH_URL}\"one+four\"[tiab:~2]"));
}
