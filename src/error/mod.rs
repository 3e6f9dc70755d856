use thiserror::Error;

use crate::lookup::LookupError;
use crate::pk::PkError;

#[derive(Error, Debug)]
pub enum PharmcalcError {
    #[error("Error in a lookup table: {0}")]
    Lookup(#[from] LookupError),
    #[error("Error in PK parameters: {0}")]
    Pk(#[from] PkError),
}
