//! Search plans: several pairwise searches described in one YAML file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ProximityConfig;
use crate::error::{PairwiseError, Result};
use crate::link::search_url;
use crate::query::{FragmentTemplate, ProximityQueries, combine};
use crate::terms::TermSource;

/// Which pairwise search a job produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// MeSH heading × subheading
    Mesh,
    /// Keyword × keyword proximity, engine and spreadsheet variants
    Proximity,
    /// Keyword × keyword AND
    Intersection,
}

/// One pairwise search over two term list files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanJob {
    pub name: String,
    pub kind: JobKind,
    /// Outer term list
    pub first: PathBuf,
    /// Inner term list
    pub second: PathBuf,
    /// Overrides the plan-wide proximity field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Overrides the plan-wide proximity distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

impl PlanJob {
    pub fn new<N, P, Q>(name: N, kind: JobKind, first: P, second: Q) -> Self
    where
        N: Into<String>,
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            kind,
            first: first.into(),
            second: second.into(),
            field: None,
            distance: None,
        }
    }

    /// Proximity parameters for this job, falling back to `defaults` and
    /// then to [`ProximityConfig::default`]
    pub fn proximity_config(&self, defaults: Option<&ProximityConfig>) -> ProximityConfig {
        let defaults = defaults.cloned().unwrap_or_default();
        ProximityConfig {
            field: self.field.clone().unwrap_or(defaults.field),
            distance: self.distance.unwrap_or(defaults.distance),
        }
    }

    fn has_proximity_override(&self) -> bool {
        self.field.is_some() || self.distance.is_some()
    }

    /// Load both term lists from `source` and build the search string
    ///
    /// Relative paths are resolved against `base_dir` when one is given.
    /// `defaults` only matters for proximity jobs.
    pub fn run<S>(
        &self,
        source: &S,
        defaults: Option<&ProximityConfig>,
        base_dir: Option<&Path>,
    ) -> Result<GeneratedQuery>
    where
        S: TermSource + ?Sized,
    {
        let first = source.load(&resolve(base_dir, &self.first))?;
        let second = source.load(&resolve(base_dir, &self.second))?;

        let (first, second) = (first.as_slice(), second.as_slice());

        if self.kind != JobKind::Proximity && self.has_proximity_override() {
            debug!(
                job = %self.name,
                kind = ?self.kind,
                "Ignoring field/distance override on non-proximity job"
            );
        }

        let (query, spreadsheet) = match self.kind {
            JobKind::Mesh => (combine(first, second, &FragmentTemplate::Mesh), None),
            JobKind::Intersection => (
                combine(first, second, &FragmentTemplate::Intersection),
                None,
            ),
            JobKind::Proximity => {
                let config = self.proximity_config(defaults);
                let queries = ProximityQueries::build(first, second, &config);
                (queries.engine, Some(queries.spreadsheet))
            }
        };

        let generated = GeneratedQuery {
            name: self.name.clone(),
            kind: self.kind,
            pair_count: first.len() * second.len(),
            url: search_url(&query),
            query,
            spreadsheet,
        };
        debug!(
            job = %generated.name,
            pairs = generated.pair_count,
            "Generated pairwise query"
        );
        Ok(generated)
    }
}

fn resolve(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Output of one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuery {
    pub name: String,
    pub kind: JobKind,
    pub pair_count: usize,
    /// OR-joined search string for the PubMed query box
    pub query: String,
    /// Spreadsheet-escaped variant, proximity jobs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet: Option<String>,
    /// PubMed search link for `query`
    pub url: String,
}

/// A list of pairwise searches sharing one proximity configuration
///
/// # Example
///
/// ```
/// use pubmed_pairwise::plan::SearchPlan;
/// use pubmed_pairwise::terms::MemoryTermSource;
///
/// let plan = SearchPlan::from_yaml_str(
///     r#"
/// jobs:
///   - name: mesh
///     kind: mesh
///     first: headings.txt
///     second: subheadings.txt
/// "#,
/// )
/// .unwrap();
///
/// let source = MemoryTermSource::new()
///     .with_list("headings.txt", &["Asthma"][..])
///     .with_list("subheadings.txt", &["therapy"][..]);
///
/// let results = plan.run(&source).unwrap();
/// assert_eq!(results[0].query, "Asthma/therapy[mh]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    #[serde(default)]
    pub proximity: ProximityConfig,
    #[serde(default)]
    pub jobs: Vec<PlanJob>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl SearchPlan {
    pub fn new(proximity: ProximityConfig) -> Self {
        Self {
            proximity,
            jobs: Vec::new(),
            base_dir: None,
        }
    }

    pub fn with_job(mut self, job: PlanJob) -> Self {
        self.jobs.push(job);
        self
    }

    /// Resolve relative term list paths against `dir`
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Parse a plan from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a plan file; relative term paths resolve against its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| PairwiseError::PlanFile {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = Self::from_yaml_str(&yaml)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        info!(path = %path.display(), jobs = plan.jobs.len(), "Loaded search plan");
        Ok(plan.with_base_dir(base_dir))
    }

    /// Run every job in order; the first failing job aborts the run
    pub fn run<S>(&self, source: &S) -> Result<Vec<GeneratedQuery>>
    where
        S: TermSource + ?Sized,
    {
        self.jobs
            .iter()
            .map(|job| job.run(source, Some(&self.proximity), self.base_dir()))
            .collect()
    }
}
