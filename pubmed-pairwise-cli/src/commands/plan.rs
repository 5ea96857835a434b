use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pubmed_pairwise::{FileTermSource, SearchPlan};

use super::{OutputOptions, write_results};

#[derive(Args, Debug)]
pub struct Plan {
    /// YAML plan file; term list paths are relative to it
    #[arg(value_name = "PLAN")]
    plan: PathBuf,
}

impl Plan {
    pub fn execute(&self, options: &OutputOptions) -> Result<()> {
        let plan = SearchPlan::from_file(&self.plan)?;
        let results = plan.run(&FileTermSource)?;
        tracing::info!(jobs = results.len(), "Search plan completed");
        write_results(&results, options)
    }
}
