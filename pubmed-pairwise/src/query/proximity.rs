//! Engine-ready and spreadsheet-ready proximity strings

use serde::Serialize;

use crate::config::ProximityConfig;

use super::builder::render;
use super::pairs::build_pairs;
use super::template::FragmentTemplate;

/// Both renderings of one keyword proximity search
///
/// The two strings come from the same pair sequence, so fragment `i` of
/// `engine` and fragment `i` of `spreadsheet` always describe the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProximityQueries {
    /// Search string for the PubMed query box
    pub engine: String,
    /// Search string with doubled quotes for a spreadsheet cell
    pub spreadsheet: String,
    /// Number of keyword pairs in each string
    pub pair_count: usize,
}

impl ProximityQueries {
    /// Build both proximity strings for `list_a` × `list_b`
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_pairwise::config::ProximityConfig;
    /// use pubmed_pairwise::query::ProximityQueries;
    ///
    /// let queries = ProximityQueries::build(&["one"], &["four"], &ProximityConfig::default());
    /// assert_eq!(queries.engine, "\"one four\"[tiab:~2]");
    /// assert_eq!(queries.spreadsheet, "\"\"\"one four\"\"[tiab:~2]");
    /// ```
    pub fn build<A, B>(list_a: &[A], list_b: &[B], config: &ProximityConfig) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let pairs = build_pairs(list_a, list_b);
        let engine = FragmentTemplate::proximity(config.field.as_str(), config.distance);
        let spreadsheet = FragmentTemplate::proximity_spreadsheet(config.distance);

        Self {
            engine: render(&pairs, &engine),
            spreadsheet: render(&pairs, &spreadsheet),
            pair_count: pairs.len(),
        }
    }
}
