//! Pairwise drug interaction lookup
//!
//! The interaction file is a JSON object keyed by a comma-joined, sorted,
//! lowercase drug pair:
//!
//! ```json
//! { "aspirin,warfarin": "Increased risk of bleeding" }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::LookupError;
use super::load::{parse_table, read_table};

/// Unordered pair of lowercase drug names
///
/// The names are trimmed and stored sorted, so
/// `DrugPair::new("b", "a") == DrugPair::new("a", "b")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrugPair {
    first: String,
    second: String,
}

impl DrugPair {
    pub fn new(a: &str, b: &str) -> Self {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl FromStr for DrugPair {
    type Err = LookupError;

    /// Parse a `"drug_a,drug_b"` key; surrounding whitespace is ignored
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut names = key.split(',').map(str::trim);
        match (names.next(), names.next(), names.next()) {
            (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok(Self::new(a, b)),
            _ => Err(LookupError::invalid_pair_key(key)),
        }
    }
}

impl fmt::Display for DrugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

/// Interaction record for one drug pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub description: String,
}

/// An interaction found in a drug list
///
/// `first` and `second` keep the caller's spelling, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionMatch {
    pub first: String,
    pub second: String,
    pub description: String,
}

impl fmt::Display for InteractionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interaction between {} and {}: {}",
            self.first, self.second, self.description
        )
    }
}

/// Drug pair to interaction table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTable {
    interactions: HashMap<DrugPair, Interaction>,
}

impl InteractionTable {
    /// Load an interaction table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let raw: BTreeMap<String, String> = read_table(path)?;
        let table = Self::from_entries(raw)?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "Loaded drug interactions"
        );
        Ok(table)
    }

    /// Build a table from `("drug_a,drug_b", description)` entries
    ///
    /// Two keys naming the same pair (e.g. `"a,b"` and `"B,A"`) are rejected.
    pub fn from_entries<I, K, D>(entries: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: Into<String>,
    {
        let mut interactions = HashMap::new();
        for (key, description) in entries {
            let pair: DrugPair = key.as_ref().parse()?;
            let interaction = Interaction {
                description: description.into(),
            };
            if interactions.insert(pair.clone(), interaction).is_some() {
                return Err(LookupError::DuplicatePair {
                    pair: pair.to_string(),
                });
            }
        }
        Ok(Self { interactions })
    }

    /// Interaction between two drugs, in either order and any case
    pub fn get(&self, a: &str, b: &str) -> Option<&Interaction> {
        self.interactions.get(&DrugPair::new(a, b))
    }

    /// All interactions among `drugs`, scanning index pairs `i < j` in order
    ///
    /// A drug is never paired with itself. A name listed twice is paired
    /// with each of its other occurrences like any other entry.
    pub fn find<S: AsRef<str>>(&self, drugs: &[S]) -> Vec<InteractionMatch> {
        let mut found = Vec::new();
        for (i, a) in drugs.iter().enumerate() {
            for b in &drugs[i + 1..] {
                let (a, b) = (a.as_ref(), b.as_ref());
                if let Some(interaction) = self.get(a, b) {
                    tracing::debug!(first = a, second = b, "Interaction found");
                    found.push(InteractionMatch {
                        first: a.to_string(),
                        second: b.to_string(),
                        description: interaction.description.clone(),
                    });
                }
            }
        }
        found
    }

    /// Formatted descriptions of all interactions among `drugs`
    pub fn check<S: AsRef<str>>(&self, drugs: &[S]) -> Vec<String> {
        self.find(drugs).iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DrugPair, &Interaction)> {
        self.interactions.iter()
    }
}

impl FromStr for InteractionTable {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: BTreeMap<String, String> = parse_table(s, Path::new("<inline>"))?;
        Self::from_entries(raw)
    }
}

/// Check a drug list against the interaction table stored in `db_file`
///
/// The file is read on every call. Returns one formatted description per
/// interacting pair, in `(i, j)` order; an empty list when none interact.
pub fn check_interactions<S: AsRef<str>>(
    drugs: &[S],
    db_file: impl AsRef<Path>,
) -> Result<Vec<String>, LookupError> {
    Ok(InteractionTable::from_path(db_file)?.check(drugs))
}
