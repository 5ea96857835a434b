//! Fragment templates for the supported pairwise search styles

use super::pairs::Pair;

/// Field used by the spreadsheet proximity variant
pub const SPREADSHEET_PROXIMITY_FIELD: &str = "tiab";

/// How a single pair is rendered into a PubMed query fragment
///
/// Terms are substituted verbatim. Terms containing quotes, parentheses or
/// brackets are not escaped and may yield a fragment PubMed cannot parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentTemplate {
    /// MeSH heading/subheading: `{A}/{B}[mh]`
    Mesh,
    /// Proximity search ready for the PubMed query box:
    /// `"{A} {B}"[{field}:~{distance}]`
    ProximityEngine { field: String, distance: u32 },
    /// Proximity search with doubled quotes for pasting into a spreadsheet
    /// cell: `"""{A} {B}""[tiab:~{distance}]`
    ProximitySpreadsheet { distance: u32 },
    /// Boolean intersection: `({A} AND {B})`
    Intersection,
}

impl FragmentTemplate {
    /// Proximity template for the query box
    pub fn proximity<S: Into<String>>(field: S, distance: u32) -> Self {
        FragmentTemplate::ProximityEngine {
            field: field.into(),
            distance,
        }
    }

    /// Proximity template for spreadsheet cells
    pub fn proximity_spreadsheet(distance: u32) -> Self {
        FragmentTemplate::ProximitySpreadsheet { distance }
    }

    /// Render one pair through this template
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_pairwise::query::{FragmentTemplate, Pair};
    ///
    /// let fragment = FragmentTemplate::Mesh.format(&Pair::new("Asthma", "therapy"));
    /// assert_eq!(fragment, "Asthma/therapy[mh]");
    /// ```
    pub fn format(&self, pair: &Pair<'_>) -> String {
        let (a, b) = pair.as_tuple();
        match self {
            FragmentTemplate::Mesh => format!("{a}/{b}[mh]"),
            FragmentTemplate::ProximityEngine { field, distance } => {
                format!("\"{a} {b}\"[{field}:~{distance}]")
            }
            FragmentTemplate::ProximitySpreadsheet { distance } => {
                format!("\"\"\"{a} {b}\"\"[{SPREADSHEET_PROXIMITY_FIELD}:~{distance}]")
            }
            FragmentTemplate::Intersection => format!("({a} AND {b})"),
        }
    }

    /// Short name used in logs and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            FragmentTemplate::Mesh => "mesh",
            FragmentTemplate::ProximityEngine { .. } => "proximity_engine",
            FragmentTemplate::ProximitySpreadsheet { .. } => "proximity_spreadsheet",
            FragmentTemplate::Intersection => "intersection",
        }
    }
}

/// Render a pair through `template`
pub fn format_fragment(pair: &Pair<'_>, template: &FragmentTemplate) -> String {
    template.format(pair)
}
