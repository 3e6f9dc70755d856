//! Closed-form pharmacokinetic formulas
//!
//! Every function in this module is a direct algebraic transform of its inputs.
//! Inputs are not checked for physical plausibility: a zero volume or clearance
//! propagates as `inf`/`NaN` following IEEE-754. Use [`crate::pk::OneCompartment`]
//! when inputs need to be validated first.
//!
//! Units: dose in mg, concentration in mg/L, clearance in L/hr, volume in L,
//! time in hours.

/// Approximation of ln(2) used for half-life conversions
pub const LN2_APPROX: f64 = 0.693;

// ============================================================================
// Elimination
// ============================================================================

/// Elimination rate constant (1/hr) from clearance and volume of distribution
///
/// `ke = CL / Vd`
#[inline]
pub fn elimination_rate_constant(cl: f64, vd: f64) -> f64 {
    cl / vd
}

/// Half-life (hours) from clearance and volume of distribution
///
/// `t½ = 0.693 / ke`
#[inline]
pub fn half_life(cl: f64, vd: f64) -> f64 {
    let ke = elimination_rate_constant(cl, vd);
    LN2_APPROX / ke
}

/// Elimination rate constant (1/hr) from a known half-life
#[inline]
pub fn elimination_rate_from_half_life(t_half: f64) -> f64 {
    LN2_APPROX / t_half
}

/// Clearance (L/hr) from the elimination rate constant and volume
#[inline]
pub fn clearance_from_elimination(ke: f64, vd: f64) -> f64 {
    ke * vd
}

/// Clearance (L/hr) from the bioavailable dose and the AUC (mg·hr/L)
///
/// `CL = F · Dose / AUC`
#[inline]
pub fn clearance_from_auc(f: f64, dose: f64, auc: f64) -> f64 {
    f * dose / auc
}

/// Volume of distribution (L) from an IV bolus dose and the initial concentration
#[inline]
pub fn volume_of_distribution(dose: f64, c0: f64) -> f64 {
    dose / c0
}

// ============================================================================
// IV bolus
// ============================================================================

/// Initial plasma concentration (mg/L) after an IV bolus
#[inline]
pub fn initial_concentration(dose: f64, vd: f64) -> f64 {
    dose / vd
}

/// Plasma concentration after a single IV bolus, `t` hours after the dose
///
/// `C(t) = C0 · e^(-ke·t)`
#[inline]
pub fn plasma_concentration_iv_bolus_single(c0: f64, ke: f64, t: f64) -> f64 {
    c0 * (-ke * t).exp()
}

/// Plasma concentration `t` hours after the last of `n` bolus doses given every `tau` hours
///
/// `C(t) = C0 · (1 - e^(-n·ke·τ)) / (1 - e^(-ke·τ)) · e^(-ke·t)`
///
/// With `n = 1` this reduces to [`plasma_concentration_iv_bolus_single`].
pub fn plasma_concentration_iv_bolus_multiple(c0: f64, ke: f64, tau: f64, n: u32, t: f64) -> f64 {
    let n = f64::from(n);
    let accumulation = (1.0 - (-n * ke * tau).exp()) / (1.0 - (-ke * tau).exp());
    c0 * accumulation * (-ke * t).exp()
}

/// Peak concentration immediately after the `n`-th bolus dose
#[inline]
pub fn peak_concentration_multiple(c0: f64, ke: f64, tau: f64, n: u32) -> f64 {
    plasma_concentration_iv_bolus_multiple(c0, ke, tau, n, 0.0)
}

/// Trough concentration just before the dose following the `n`-th bolus
#[inline]
pub fn trough_concentration_multiple(c0: f64, ke: f64, tau: f64, n: u32) -> f64 {
    plasma_concentration_iv_bolus_multiple(c0, ke, tau, n, tau)
}

// ============================================================================
// Steady state
// ============================================================================

/// Accumulation factor for repeated dosing every `tau` hours
///
/// `R = 1 / (1 - e^(-ke·τ))`
#[inline]
pub fn accumulation_factor(ke: f64, tau: f64) -> f64 {
    1.0 / (1.0 - (-ke * tau).exp())
}

/// Peak concentration at steady state for repeated IV bolus dosing
#[inline]
pub fn steady_state_peak(c0: f64, ke: f64, tau: f64) -> f64 {
    c0 * accumulation_factor(ke, tau)
}

/// Trough concentration at steady state for repeated IV bolus dosing
#[inline]
pub fn steady_state_trough(c0: f64, ke: f64, tau: f64) -> f64 {
    steady_state_peak(c0, ke, tau) * (-ke * tau).exp()
}

/// Average steady-state concentration (mg/L)
///
/// `Css,avg = F · Dose / (CL · τ)`
#[inline]
pub fn average_steady_state_concentration(f: f64, dose: f64, cl: f64, tau: f64) -> f64 {
    f * dose / (cl * tau)
}

// ============================================================================
// Constant rate infusion
// ============================================================================

/// Plasma concentration `t` hours into a constant rate infusion of `k0` mg/hr
///
/// `C(t) = k0 / CL · (1 - e^(-ke·t))`
#[inline]
pub fn plasma_concentration_infusion(k0: f64, cl: f64, ke: f64, t: f64) -> f64 {
    k0 / cl * (1.0 - (-ke * t).exp())
}

/// Steady-state concentration reached by a constant rate infusion
#[inline]
pub fn steady_state_concentration_infusion(k0: f64, cl: f64) -> f64 {
    k0 / cl
}
