//! Pairwise query construction
//!
//! One routine covers every search style: pair two term lists, render each
//! pair through a [`FragmentTemplate`], and join the fragments with `OR`.
//!
//! - `pairs` - Cartesian pairing in row-major order
//! - `template` - MeSH, proximity and intersection fragment templates
//! - `builder` - OR-joining and the [`PairwiseQuery`] builder
//! - `proximity` - engine and spreadsheet proximity strings from one pair set

pub mod builder;
pub mod pairs;
pub mod proximity;
pub mod template;

pub use builder::{OR_DELIMITER, PairwiseQuery, combine, join_with_or};
pub use pairs::{Pair, build_pairs};
pub use proximity::ProximityQueries;
pub use template::{FragmentTemplate, SPREADSHEET_PROXIMITY_FIELD, format_fragment};
