//! Cartesian pairing of two term lists

/// An ordered pair of terms drawn from two term lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<'a> {
    /// Term from the first (outer) list
    pub first: &'a str,
    /// Term from the second (inner) list
    pub second: &'a str,
}

impl<'a> Pair<'a> {
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    pub fn as_tuple(&self) -> (&'a str, &'a str) {
        (self.first, self.second)
    }
}

/// Build every pair of `list_a` × `list_b` in row-major order
///
/// `list_a` is the outer loop and `list_b` the inner one, so for
/// `[a1, a2]` and `[b1, b2]` the result is `(a1,b1), (a1,b2), (a2,b1), (a2,b2)`.
/// An empty list on either side yields no pairs.
///
/// # Example
///
/// ```
/// use pubmed_pairwise::query::{build_pairs, Pair};
///
/// let pairs = build_pairs(&["a1", "a2"], &["b1"]);
/// assert_eq!(pairs, vec![Pair::new("a1", "b1"), Pair::new("a2", "b1")]);
/// ```
pub fn build_pairs<'a, A, B>(list_a: &'a [A], list_b: &'a [B]) -> Vec<Pair<'a>>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut pairs = Vec::with_capacity(list_a.len() * list_b.len());
    for a in list_a {
        for b in list_b {
            pairs.push(Pair::new(a.as_ref(), b.as_ref()));
        }
    }
    pairs
}
