use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pubmed_pairwise::{FileTermSource, JobKind, PlanJob};

use super::{OutputOptions, write_results};

#[derive(Args, Debug)]
pub struct Intersection {
    /// First keyword file, one term per line
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second keyword file, one term per line
    #[arg(value_name = "SECOND")]
    second: PathBuf,
}

impl Intersection {
    pub fn execute(&self, options: &OutputOptions) -> Result<()> {
        let job = PlanJob::new(
            "intersection",
            JobKind::Intersection,
            self.first.clone(),
            self.second.clone(),
        );
        let result = job.run(&FileTermSource, None, None)?;
        write_results(&[result], options)
    }
}
