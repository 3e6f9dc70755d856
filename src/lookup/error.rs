//! Lookup error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying a lookup table
#[derive(Error, Debug)]
pub enum LookupError {
    /// The table file does not exist
    #[error("Database file '{}' not found", path.display())]
    MissingDatabase { path: PathBuf },

    /// The drug has no entry in the table
    #[error("Therapeutic range for drug '{drug}' not found in database")]
    UnknownDrug { drug: String },

    /// The table file exists but could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file is not valid JSON or has the wrong shape
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A therapeutic range with `low > high` or a non-finite bound
    #[error("Invalid therapeutic range for '{drug}': [{low}, {high}]")]
    InvalidRange { drug: String, low: f64, high: f64 },

    /// An interaction key that is not two comma-separated drug names
    #[error("Invalid interaction key '{key}': expected 'drug_a,drug_b'")]
    InvalidPairKey { key: String },

    /// Two therapeutic range entries whose names differ only in case
    #[error("Duplicate therapeutic range entry for '{drug}'")]
    DuplicateDrug { drug: String },

    /// Two interaction keys naming the same drug pair
    #[error("Duplicate interaction entry for '{pair}'")]
    DuplicatePair { pair: String },
}

impl LookupError {
    pub fn unknown_drug(drug: impl Into<String>) -> Self {
        Self::UnknownDrug { drug: drug.into() }
    }

    pub fn invalid_pair_key(key: impl Into<String>) -> Self {
        Self::InvalidPairKey { key: key.into() }
    }
}
