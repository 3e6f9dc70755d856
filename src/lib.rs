//! Closed-form pharmacokinetic formulas with therapeutic range and drug
//! interaction lookups.
//!
//! - [`pk`]: elimination, half-life, bolus/infusion concentration curves,
//!   steady state and dose adjustment.
//! - [`lookup`]: JSON-backed therapeutic range and interaction checks.
pub mod error;
pub mod lookup;
pub mod pk;

pub use error::PharmcalcError;
pub use lookup::{
    check_interactions, is_within_therapeutic_range, InteractionTable, LookupConfig, LookupError,
    TherapeuticRanges,
};
pub use pk::{OneCompartment, PkError};

pub mod prelude {
    pub use crate::lookup::{
        check_interactions, is_within_therapeutic_range, DrugPair, Interaction,
        InteractionMatch, InteractionTable, LookupConfig, LookupError, TherapeuticRange,
        TherapeuticRanges,
    };
    pub use crate::pk::*;
    pub use crate::PharmcalcError;
}
