use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pubmed_pairwise::config::{DEFAULT_PROXIMITY_DISTANCE, DEFAULT_PROXIMITY_FIELD};
use pubmed_pairwise::{FileTermSource, JobKind, PlanJob, ProximityConfig};

use super::{OutputOptions, write_results};

#[derive(Args, Debug)]
pub struct Proximity {
    /// First keyword file, one term per line
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second keyword file, one term per line
    #[arg(value_name = "SECOND")]
    second: PathBuf,

    /// PubMed field tag to search (e.g. tiab, ti)
    #[arg(long, env = "PUBMED_PAIRWISE_FIELD", default_value = DEFAULT_PROXIMITY_FIELD)]
    field: String,

    /// Maximum number of words between the two terms
    #[arg(long, env = "PUBMED_PAIRWISE_DISTANCE", default_value_t = DEFAULT_PROXIMITY_DISTANCE)]
    distance: u32,
}

impl Proximity {
    pub fn execute(&self, options: &OutputOptions) -> Result<()> {
        let config = self.config();
        tracing::debug!(field = %config.field, distance = config.distance, "Proximity search");

        let job = PlanJob::new(
            "proximity",
            JobKind::Proximity,
            self.first.clone(),
            self.second.clone(),
        );
        let result = job.run(&FileTermSource, Some(&config), None)?;
        write_results(&[result], options)
    }

    fn config(&self) -> ProximityConfig {
        ProximityConfig::new()
            .with_field(self.field.as_str())
            .with_distance(self.distance)
    }
}
