//! Pharmacokinetic formulas
//!
//! Closed-form calculations for a one-compartment model with first-order
//! elimination, together with simple dose adjustment rules.
//!
//! | Quantity | Function |
//! |----------|----------|
//! | ke | [`elimination_rate_constant`] |
//! | t½ | [`half_life`] |
//! | C0 | [`initial_concentration`] |
//! | C(t), single bolus | [`plasma_concentration_iv_bolus_single`] |
//! | C(t), repeated bolus | [`plasma_concentration_iv_bolus_multiple`] |
//! | Cmax,ss / Cmin,ss | [`steady_state_peak`] / [`steady_state_trough`] |
//! | Css,avg | [`average_steady_state_concentration`] |
//! | C(t), infusion | [`plasma_concentration_infusion`] |
//! | CLcr | [`creatinine_clearance`] |
//!
//! # Usage
//!
//! ```rust
//! use pharmcalc::pk::*;
//!
//! let ke = elimination_rate_constant(5.0, 50.0);
//! let c0 = initial_concentration(500.0, 50.0);
//! let c5 = plasma_concentration_iv_bolus_single(c0, ke, 5.0);
//! assert!((c5 - 6.0653).abs() < 1e-4);
//!
//! let dose = kidney_adjusted_dose(100.0, 50.0);
//! assert_eq!(dose, 50.0);
//! ```
//!
//! The free functions do not validate their inputs. [`OneCompartment`] rejects
//! non-positive clearance and volume up front:
//!
//! ```rust
//! use pharmcalc::pk::OneCompartment;
//!
//! assert!(OneCompartment::new(5.0, 0.0).is_err());
//! ```

mod calc;
mod dosing;
mod error;
mod model;

pub use calc::*;
pub use dosing::{
    adjust_dose_for_kidney_function, adjust_dose_for_liver_function, creatinine_clearance,
    kidney_adjusted_dose, liver_adjusted_dose, Sex, MAX_LIVER_SCORE,
    STANDARD_CREATININE_CLEARANCE,
};
pub use error::PkError;
pub use model::OneCompartment;
