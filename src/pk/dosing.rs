//! Patient-specific dose adjustment
//!
//! Linear scaling rules for impaired renal or hepatic function, and the
//! Cockcroft-Gault estimate of creatinine clearance used as their input.
//! None of the adjustments are clamped.

use serde::{Deserialize, Serialize};

/// Reference creatinine clearance for a normal renal function (mL/min)
pub const STANDARD_CREATININE_CLEARANCE: f64 = 100.0;

/// Liver function score of a maximally compromised liver (Child-Pugh scale)
pub const MAX_LIVER_SCORE: f64 = 15.0;

/// Fraction of the dose removed at [`MAX_LIVER_SCORE`]
const MAX_LIVER_REDUCTION: f64 = 0.5;

/// Scale a dose by the ratio of the patient's creatinine clearance to a reference value
///
/// `dose · CLcr / CLcr,std`
pub fn adjust_dose_for_kidney_function(
    dose: f64,
    creatinine_clearance: f64,
    standard_creatinine_clearance: f64,
) -> f64 {
    dose * (creatinine_clearance / standard_creatinine_clearance)
}

/// [`adjust_dose_for_kidney_function`] against [`STANDARD_CREATININE_CLEARANCE`]
#[inline]
pub fn kidney_adjusted_dose(dose: f64, creatinine_clearance: f64) -> f64 {
    adjust_dose_for_kidney_function(dose, creatinine_clearance, STANDARD_CREATININE_CLEARANCE)
}

/// Attenuate a dose for compromised liver function
///
/// `dose · (1 - score / max_score · 0.5)`
///
/// A score equal to `max_score` halves the dose. Scores above `max_score` keep
/// reducing the dose linearly and can drive it negative.
pub fn adjust_dose_for_liver_function(dose: f64, liver_function_score: f64, max_score: f64) -> f64 {
    let factor = 1.0 - (liver_function_score / max_score) * MAX_LIVER_REDUCTION;
    dose * factor
}

/// [`adjust_dose_for_liver_function`] on the Child-Pugh scale ([`MAX_LIVER_SCORE`])
#[inline]
pub fn liver_adjusted_dose(dose: f64, liver_function_score: f64) -> f64 {
    adjust_dose_for_liver_function(dose, liver_function_score, MAX_LIVER_SCORE)
}

/// Biological sex, as used by the Cockcroft-Gault equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    fn cockcroft_gault_factor(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.85,
        }
    }
}

/// Estimated creatinine clearance (mL/min) by Cockcroft-Gault
///
/// # Arguments
/// * `age` - Age in years
/// * `weight` - Body weight in kg
/// * `serum_creatinine` - Serum creatinine in mg/dL
/// * `sex` - Female estimates are scaled by 0.85
pub fn creatinine_clearance(age: f64, weight: f64, serum_creatinine: f64, sex: Sex) -> f64 {
    (140.0 - age) * weight / (72.0 * serum_creatinine) * sex.cockcroft_gault_factor()
}
