//! Pharmacokinetic parameter errors

use thiserror::Error;

/// Errors raised when validated PK parameters are constructed or used
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkError {
    /// Parameter outside its physically meaningful domain
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },
}

impl PkError {
    /// Create an invalid parameter error
    pub fn invalid(param: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            value: value.to_string(),
        }
    }
}
