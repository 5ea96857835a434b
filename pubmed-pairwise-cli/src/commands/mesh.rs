use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pubmed_pairwise::{FileTermSource, JobKind, PlanJob};

use super::{OutputOptions, write_results};

#[derive(Args, Debug)]
pub struct Mesh {
    /// File of MeSH headings, one per line
    #[arg(value_name = "HEADINGS")]
    headings: PathBuf,

    /// File of MeSH subheadings, one per line
    #[arg(value_name = "SUBHEADINGS")]
    subheadings: PathBuf,
}

impl Mesh {
    pub fn execute(&self, options: &OutputOptions) -> Result<()> {
        let job = self.job();
        let result = job.run(&FileTermSource, None, None)?;
        write_results(&[result], options)
    }

    fn job(&self) -> PlanJob {
        PlanJob::new(
            "mesh",
            JobKind::Mesh,
            self.headings.clone(),
            self.subheadings.clone(),
        )
    }
}
