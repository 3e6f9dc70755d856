//! Validated one-compartment parameter set
//!
//! [`OneCompartment`] checks clearance and volume once at construction and then
//! evaluates the formulas in [`super::calc`] without further checks.

use super::calc;
use super::error::PkError;

/// One-compartment model with first-order elimination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneCompartment {
    /// Clearance (L/hr)
    cl: f64,
    /// Volume of distribution (L)
    vd: f64,
}

fn positive(param: &str, value: f64) -> Result<f64, PkError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PkError::invalid(param, value))
    }
}

fn non_negative(param: &str, value: f64) -> Result<f64, PkError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PkError::invalid(param, value))
    }
}

impl OneCompartment {
    /// Create a model from clearance (L/hr) and volume of distribution (L)
    ///
    /// Both must be finite and strictly positive.
    pub fn new(cl: f64, vd: f64) -> Result<Self, PkError> {
        Ok(Self {
            cl: positive("cl", cl)?,
            vd: positive("vd", vd)?,
        })
    }

    /// Create a model from an elimination rate constant (1/hr) and volume (L)
    pub fn from_elimination(ke: f64, vd: f64) -> Result<Self, PkError> {
        let ke = positive("ke", ke)?;
        let vd = positive("vd", vd)?;
        Self::new(calc::clearance_from_elimination(ke, vd), vd)
    }

    pub fn clearance(&self) -> f64 {
        self.cl
    }

    pub fn volume(&self) -> f64 {
        self.vd
    }

    /// Elimination rate constant (1/hr)
    pub fn ke(&self) -> f64 {
        calc::elimination_rate_constant(self.cl, self.vd)
    }

    /// Half-life (hours)
    pub fn half_life(&self) -> f64 {
        calc::half_life(self.cl, self.vd)
    }

    /// Initial concentration (mg/L) after an IV bolus of `dose` mg
    pub fn initial_concentration(&self, dose: f64) -> Result<f64, PkError> {
        let dose = non_negative("dose", dose)?;
        Ok(calc::initial_concentration(dose, self.vd))
    }

    /// Concentration (mg/L) `t` hours after a single IV bolus of `dose` mg
    pub fn concentration(&self, dose: f64, t: f64) -> Result<f64, PkError> {
        let c0 = self.initial_concentration(dose)?;
        Ok(calc::plasma_concentration_iv_bolus_single(c0, self.ke(), t))
    }

    /// Concentration (mg/L) `t` hours after the `n`-th bolus of `dose` mg given every `tau` hours
    pub fn concentration_multiple(
        &self,
        dose: f64,
        tau: f64,
        n: u32,
        t: f64,
    ) -> Result<f64, PkError> {
        let c0 = self.initial_concentration(dose)?;
        let tau = positive("tau", tau)?;
        if n == 0 {
            return Err(PkError::invalid("n", 0.0));
        }
        Ok(calc::plasma_concentration_iv_bolus_multiple(
            c0,
            self.ke(),
            tau,
            n,
            t,
        ))
    }

    /// Steady-state peak (mg/L) for repeated bolus dosing
    pub fn steady_state_peak(&self, dose: f64, tau: f64) -> Result<f64, PkError> {
        let c0 = self.initial_concentration(dose)?;
        let tau = positive("tau", tau)?;
        Ok(calc::steady_state_peak(c0, self.ke(), tau))
    }

    /// Steady-state trough (mg/L) for repeated bolus dosing
    pub fn steady_state_trough(&self, dose: f64, tau: f64) -> Result<f64, PkError> {
        let c0 = self.initial_concentration(dose)?;
        let tau = positive("tau", tau)?;
        Ok(calc::steady_state_trough(c0, self.ke(), tau))
    }

    /// Average steady-state concentration (mg/L) for a fully bioavailable dose
    pub fn average_steady_state(&self, dose: f64, tau: f64) -> Result<f64, PkError> {
        let dose = non_negative("dose", dose)?;
        let tau = positive("tau", tau)?;
        Ok(calc::average_steady_state_concentration(1.0, dose, self.cl, tau))
    }
}
