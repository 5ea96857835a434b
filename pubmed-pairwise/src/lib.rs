//! # PubMed Pairwise
//!
//! Generates exhaustive pairwise combinations of search terms and formats
//! them as PubMed query syntax.
//!
//! ## Features
//!
//! - **MeSH combinations**: every heading × subheading as `{heading}/{subheading}[mh]`
//! - **Proximity searches**: keyword pairs as `"{a} {b}"[tiab:~N]`, plus a
//!   spreadsheet-escaped variant
//! - **Intersections**: keyword pairs as `({a} AND {b})`
//! - **Search links**: PubMed URLs for the finished search string
//! - **Search plans**: several searches described in one YAML file
//!
//! ## Quick Start
//!
//! ```
//! use pubmed_pairwise::query::PairwiseQuery;
//!
//! let query = PairwiseQuery::mesh()
//!     .first(&["Asthma", "COPD"])
//!     .second(&["drug therapy"]);
//!
//! assert_eq!(
//!     query.build(),
//!     "Asthma/drug therapy[mh] OR COPD/drug therapy[mh]"
//! );
//! println!("{}", query.search_url());
//! ```
//!
//! ### Loading term lists from files
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pubmed_pairwise::query::{combine, FragmentTemplate};
//! use pubmed_pairwise::terms::{FileTermSource, TermSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let first = FileTermSource.load(Path::new("keywords_a.txt"))?;
//!     let second = FileTermSource.load(Path::new("keywords_b.txt"))?;
//!
//!     let query = combine(first.as_slice(), second.as_slice(), &FragmentTemplate::Intersection);
//!     println!("{query}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod plan;
pub mod query;
pub mod terms;

// Re-export main types for convenience
pub use config::ProximityConfig;
pub use error::{PairwiseError, Result};
pub use link::{LinkRenderer, LinkStyle, search_url};
pub use plan::{GeneratedQuery, JobKind, PlanJob, SearchPlan};
pub use query::{
    FragmentTemplate, Pair, PairwiseQuery, ProximityQueries, build_pairs, combine, join_with_or,
};
pub use terms::{FileTermSource, MemoryTermSource, TermList, TermSource};
