//! Proximity search parameters

use serde::{Deserialize, Serialize};

/// Field searched by default (title/abstract)
pub const DEFAULT_PROXIMITY_FIELD: &str = "tiab";

/// Default word distance between the two proximity terms
pub const DEFAULT_PROXIMITY_DISTANCE: u32 = 2;

/// Parameters of the proximity template
///
/// # Example
///
/// ```
/// use pubmed_pairwise::config::ProximityConfig;
///
/// let config = ProximityConfig::new().with_field("ti").with_distance(4);
/// assert_eq!(config.field, "ti");
/// assert_eq!(config.distance, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// PubMed field tag, e.g. `tiab` or `ti`
    pub field: String,
    /// Maximum number of words between the two terms
    pub distance: u32,
}

impl ProximityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self
    }

    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_PROXIMITY_FIELD.to_string(),
            distance: DEFAULT_PROXIMITY_DISTANCE,
        }
    }
}
