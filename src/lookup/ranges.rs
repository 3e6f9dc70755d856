//! Therapeutic range lookup
//!
//! The range file is a JSON object mapping lowercase drug names to a
//! `[low, high]` pair:
//!
//! ```json
//! { "vancomycin": [10.0, 20.0], "digoxin": [0.5, 2.0] }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;

use super::error::LookupError;
use super::load::{parse_table, read_table};

/// Inclusive concentration interval (mg/L) with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TherapeuticRange {
    low: f64,
    high: f64,
}

impl TherapeuticRange {
    /// Returns `None` unless both bounds are finite and `low <= high`
    pub fn new(low: f64, high: f64) -> Option<Self> {
        (low.is_finite() && high.is_finite() && low <= high).then_some(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Whether `concentration` lies in `[low, high]`
    #[inline]
    pub fn contains(&self, concentration: f64) -> bool {
        self.low <= concentration && concentration <= self.high
    }
}

/// Drug name to therapeutic range table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TherapeuticRanges {
    ranges: HashMap<String, TherapeuticRange>,
}

impl TherapeuticRanges {
    /// Load a range table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let raw: BTreeMap<String, (f64, f64)> = read_table(path)?;
        let table = Self::from_pairs(raw)?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "Loaded therapeutic ranges"
        );
        Ok(table)
    }

    /// Build a table from `(drug, (low, high))` entries
    ///
    /// Drug names are lowercased. Fails on the first entry that is not a valid range,
    /// or whose name matches an earlier entry once lowercased.
    pub fn from_pairs<I, S>(entries: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: AsRef<str>,
    {
        let mut ranges = HashMap::new();
        for (drug, (low, high)) in entries {
            let drug = drug.as_ref();
            let range =
                TherapeuticRange::new(low, high).ok_or_else(|| LookupError::InvalidRange {
                    drug: drug.to_string(),
                    low,
                    high,
                })?;
            let name = drug.to_lowercase();
            if ranges.insert(name.clone(), range).is_some() {
                return Err(LookupError::DuplicateDrug { drug: name });
            }
        }
        Ok(Self { ranges })
    }

    /// Range for `drug`, matched case-insensitively
    pub fn get(&self, drug: &str) -> Result<&TherapeuticRange, LookupError> {
        self.ranges.get(&drug.to_lowercase()).ok_or_else(|| {
            tracing::warn!(drug, "No therapeutic range on record");
            LookupError::unknown_drug(drug)
        })
    }

    /// Whether `concentration` lies within the therapeutic range of `drug`
    pub fn is_within_range(&self, concentration: f64, drug: &str) -> Result<bool, LookupError> {
        Ok(self.get(drug)?.contains(concentration))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TherapeuticRange)> {
        self.ranges.iter().map(|(drug, range)| (drug.as_str(), range))
    }
}

impl FromStr for TherapeuticRanges {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: BTreeMap<String, (f64, f64)> = parse_table(s, Path::new("<inline>"))?;
        Self::from_pairs(raw)
    }
}

/// Check a concentration against the therapeutic range of `drug` stored in `db_file`
///
/// The file is read on every call. Load a [`TherapeuticRanges`] once to check
/// many concentrations against the same table.
pub fn is_within_therapeutic_range(
    concentration: f64,
    drug: &str,
    db_file: impl AsRef<Path>,
) -> Result<bool, LookupError> {
    TherapeuticRanges::from_path(db_file)?.is_within_range(concentration, drug)
}
