//! Term lists and the sources they are loaded from

use std::collections::HashMap;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PairwiseError, Result};

/// Ordered list of search terms
///
/// Order decides output order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermList(Vec<String>);

impl TermList {
    pub fn new(terms: Vec<String>) -> Self {
        Self(terms)
    }

    /// Parse one term per line
    ///
    /// Trailing whitespace (including `\r`) is stripped and lines left empty
    /// are skipped, so a final newline does not add an empty term.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_pairwise::terms::TermList;
    ///
    /// let terms = TermList::from_lines("Asthma\r\nCOPD  \n");
    /// assert_eq!(terms.as_slice(), ["Asthma", "COPD"]);
    /// ```
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TermList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for TermList {
    fn from(terms: Vec<String>) -> Self {
        Self(terms)
    }
}

impl From<&[&str]> for TermList {
    fn from(terms: &[&str]) -> Self {
        terms.iter().map(|term| term.to_string()).collect()
    }
}

impl FromIterator<String> for TermList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Loads a term list by path
pub trait TermSource {
    fn load(&self, path: &Path) -> Result<TermList>;
}

/// Reads term lists from plain-text files, one term per line
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTermSource;

impl TermSource for FileTermSource {
    fn load(&self, path: &Path) -> Result<TermList> {
        let text = fs::read_to_string(path).map_err(|source| PairwiseError::TermFile {
            path: path.to_path_buf(),
            source,
        })?;
        let terms = TermList::from_lines(&text);
        debug!(path = %path.display(), terms = terms.len(), "Loaded term list");
        Ok(terms)
    }
}

/// Term lists held in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryTermSource {
    lists: HashMap<PathBuf, TermList>,
}

impl MemoryTermSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `terms` under `path`
    pub fn with_list<P, T>(mut self, path: P, terms: T) -> Self
    where
        P: Into<PathBuf>,
        T: Into<TermList>,
    {
        self.lists.insert(path.into(), terms.into());
        self
    }
}

impl TermSource for MemoryTermSource {
    fn load(&self, path: &Path) -> Result<TermList> {
        self.lists
            .get(path)
            .cloned()
            .ok_or_else(|| PairwiseError::UnknownTermList {
                path: path.to_path_buf(),
            })
    }
}
