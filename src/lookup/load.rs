//! Reading JSON tables from disk

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::LookupError;

/// Read and deserialize a JSON table, mapping a missing file to [`LookupError::MissingDatabase`]
pub(crate) fn read_table<T: DeserializeOwned>(path: &Path) -> Result<T, LookupError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LookupError::MissingDatabase {
            path: path.to_path_buf(),
        },
        _ => LookupError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_table(&content, path)
}

/// Deserialize a JSON table from a string; `origin` is only used in error messages
pub(crate) fn parse_table<T: DeserializeOwned>(
    content: &str,
    origin: &Path,
) -> Result<T, LookupError> {
    serde_json::from_str(content).map_err(|e| LookupError::Parse {
        path: origin.to_path_buf(),
        source: e,
    })
}
