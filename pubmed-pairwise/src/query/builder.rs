//! OR-joining and the pairwise query builder

use tracing::debug;

use crate::link;

use super::pairs::{Pair, build_pairs};
use super::template::FragmentTemplate;

/// Delimiter placed between fragments of a search string
pub const OR_DELIMITER: &str = " OR ";

/// Join fragments with `" OR "`
///
/// An empty slice yields an empty string and a single fragment is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use pubmed_pairwise::query::join_with_or;
///
/// assert_eq!(join_with_or(&["a", "b"]), "a OR b");
/// assert_eq!(join_with_or::<&str>(&[]), "");
/// ```
pub fn join_with_or<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(OR_DELIMITER)
}

/// Pair two term lists, render every pair through `template`, and OR-join
/// the result
///
/// # Example
///
/// ```
/// use pubmed_pairwise::query::{combine, FragmentTemplate};
///
/// let query = combine(&["Asthma"], &["therapy", "diagnosis"], &FragmentTemplate::Mesh);
/// assert_eq!(query, "Asthma/therapy[mh] OR Asthma/diagnosis[mh]");
/// ```
pub fn combine<A, B>(list_a: &[A], list_b: &[B], template: &FragmentTemplate) -> String
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let pairs = build_pairs(list_a, list_b);
    render(&pairs, template)
}

pub(crate) fn render(pairs: &[Pair<'_>], template: &FragmentTemplate) -> String {
    debug!(
        template = template.name(),
        pairs = pairs.len(),
        "Rendering pairwise fragments"
    );
    let fragments: Vec<String> = pairs.iter().map(|pair| template.format(pair)).collect();
    join_with_or(&fragments)
}

/// Builder for a pairwise search string
#[derive(Debug, Clone)]
pub struct PairwiseQuery {
    template: FragmentTemplate,
    first: Vec<String>,
    second: Vec<String>,
}

impl PairwiseQuery {
    /// Create a builder for the given template with empty term lists
    pub fn new(template: FragmentTemplate) -> Self {
        Self {
            template,
            first: Vec::new(),
            second: Vec::new(),
        }
    }

    /// MeSH heading × subheading query
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_pairwise::query::PairwiseQuery;
    ///
    /// let query = PairwiseQuery::mesh()
    ///     .first(&["heading one", "heading two"])
    ///     .second(&["sub a", "sub b"])
    ///     .build();
    ///
    /// assert_eq!(
    ///     query,
    ///     "heading one/sub a[mh] OR heading one/sub b[mh] OR heading two/sub a[mh] OR heading two/sub b[mh]"
    /// );
    /// ```
    pub fn mesh() -> Self {
        Self::new(FragmentTemplate::Mesh)
    }

    /// Keyword proximity query for the PubMed query box
    pub fn proximity<S: Into<String>>(field: S, distance: u32) -> Self {
        Self::new(FragmentTemplate::proximity(field, distance))
    }

    /// Keyword AND intersection query
    pub fn intersection() -> Self {
        Self::new(FragmentTemplate::Intersection)
    }

    /// Append terms to the outer list
    pub fn first<S: AsRef<str>>(mut self, terms: &[S]) -> Self {
        self.first
            .extend(terms.iter().map(|term| term.as_ref().to_string()));
        self
    }

    /// Append terms to the inner list
    pub fn second<S: AsRef<str>>(mut self, terms: &[S]) -> Self {
        self.second
            .extend(terms.iter().map(|term| term.as_ref().to_string()));
        self
    }

    pub fn template(&self) -> &FragmentTemplate {
        &self.template
    }

    /// Number of pairs the query expands to
    pub fn pair_count(&self) -> usize {
        self.first.len() * self.second.len()
    }

    /// All pairs in row-major order
    pub fn pairs(&self) -> Vec<Pair<'_>> {
        build_pairs(&self.first, &self.second)
    }

    /// Rendered fragments, one per pair
    pub fn fragments(&self) -> Vec<String> {
        self.pairs()
            .iter()
            .map(|pair| self.template.format(pair))
            .collect()
    }

    /// Build the OR-joined search string
    pub fn build(&self) -> String {
        render(&self.pairs(), &self.template)
    }

    /// PubMed search URL for the built query
    pub fn search_url(&self) -> String {
        link::search_url(&self.build())
    }
}
