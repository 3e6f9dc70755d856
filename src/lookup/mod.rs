//! Therapeutic range and drug interaction lookups backed by JSON files
//!
//! Two ways to query a table:
//!
//! - The free functions [`is_within_therapeutic_range`] and [`check_interactions`]
//!   (or the same calls on a [`LookupConfig`]) read the file on every call and
//!   keep no state between calls.
//! - [`TherapeuticRanges`] and [`InteractionTable`] can be loaded once and held
//!   by the caller. Reload them to pick up changes on disk.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pharmcalc::lookup::{LookupConfig, LookupError};
//!
//! let config = LookupConfig::in_dir("/srv/tables");
//!
//! match config.is_within_range(12.0, "Vancomycin") {
//!     Ok(true) => println!("in range"),
//!     Ok(false) => println!("out of range"),
//!     Err(LookupError::UnknownDrug { drug }) => println!("no range for {drug}"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! for warning in config.check_interactions(&["warfarin", "aspirin"])? {
//!     println!("{warning}");
//! }
//! ```

mod config;
mod error;
mod interactions;
mod load;
mod ranges;

pub use config::{LookupConfig, DEFAULT_INTERACTIONS_FILE, DEFAULT_RANGES_FILE};
pub use error::LookupError;
pub use interactions::{
    check_interactions, DrugPair, Interaction, InteractionMatch, InteractionTable,
};
pub use ranges::{is_within_therapeutic_range, TherapeuticRange, TherapeuticRanges};
