//! Location of the lookup tables

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::LookupError;
use super::interactions::check_interactions;
use super::ranges::is_within_therapeutic_range;

/// Default therapeutic range file, relative to the working directory
pub const DEFAULT_RANGES_FILE: &str = "therapeutic_ranges.json";

/// Default drug interaction file, relative to the working directory
pub const DEFAULT_INTERACTIONS_FILE: &str = "drug_interactions.json";

/// Paths of the JSON lookup tables
///
/// Every check made through a `LookupConfig` re-reads its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Therapeutic range table (default: `therapeutic_ranges.json`)
    pub ranges_path: PathBuf,

    /// Drug interaction table (default: `drug_interactions.json`)
    pub interactions_path: PathBuf,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            ranges_path: PathBuf::from(DEFAULT_RANGES_FILE),
            interactions_path: PathBuf::from(DEFAULT_INTERACTIONS_FILE),
        }
    }
}

impl LookupConfig {
    /// Both tables in `dir`, under their default file names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            ranges_path: dir.join(DEFAULT_RANGES_FILE),
            interactions_path: dir.join(DEFAULT_INTERACTIONS_FILE),
        }
    }

    /// Set the therapeutic range table path
    pub fn with_ranges_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranges_path = path.into();
        self
    }

    /// Set the drug interaction table path
    pub fn with_interactions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.interactions_path = path.into();
        self
    }

    /// See [`is_within_therapeutic_range`]
    pub fn is_within_range(&self, concentration: f64, drug: &str) -> Result<bool, LookupError> {
        is_within_therapeutic_range(concentration, drug, &self.ranges_path)
    }

    /// See [`check_interactions`]
    pub fn check_interactions<S: AsRef<str>>(
        &self,
        drugs: &[S],
    ) -> Result<Vec<String>, LookupError> {
        check_interactions(drugs, &self.interactions_path)
    }
}
