//! Physical admissibility checks for density matrices
//!
//! A density matrix must be Hermitian, have unit trace and be positive
//! semi-definite. The three constraints are checked independently and every
//! failure is reported, so a caller can show all of them at once.

use num_complex::Complex64;
use qubloch_core::config::Tolerances;
use qubloch_core::matrix;
use qubloch_core::{DensityViolation, Matrix2};
use tracing::debug;

/// Largest entry of |ρ − ρ†|
pub fn hermitian_deviation(rho: &Matrix2) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..2 {
        for j in 0..2 {
            max = max.max((rho[i][j] - rho[j][i].conj()).norm());
        }
    }
    max
}

/// Eigenvalues of the Hermitian matrix described by ρ's diagonal and lower
/// off-diagonal entry, ascending
///
/// Closed form for 2×2: mean ± √(half-difference² + |ρ₁₀|²). Only the real
/// parts of the diagonal and ρ₁₀ are read, so the result is well defined
/// even when ρ itself is not Hermitian.
pub fn hermitian_eigenvalues(rho: &Matrix2) -> [f64; 2] {
    let a = rho[0][0].re;
    let d = rho[1][1].re;
    let mean = (a + d) / 2.0;
    let radius = ((a - d) / 2.0).hypot(rho[1][0].norm());
    [mean - radius, mean + radius]
}

/// Check all three density-matrix constraints with default tolerances
///
/// # Example
/// ```
/// use qubloch_state::validation::validate_density_matrix;
/// use num_complex::Complex64;
///
/// let half = Complex64::new(0.5, 0.0);
/// let zero = Complex64::new(0.0, 0.0);
/// assert!(validate_density_matrix(&[[half, zero], [zero, half]]).is_ok());
/// ```
pub fn validate_density_matrix(rho: &Matrix2) -> Result<(), Vec<DensityViolation>> {
    validate_density_matrix_with(rho, &Tolerances::default())
}

/// Check all three density-matrix constraints
///
/// A matrix with a NaN or infinite entry is rejected with the single
/// violation [`DensityViolation::NonFinite`].
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate_density_matrix_with(
    rho: &Matrix2,
    tolerances: &Tolerances,
) -> Result<(), Vec<DensityViolation>> {
    if !matrix::is_finite(rho) {
        debug!("rejected non-finite density matrix");
        return Err(vec![DensityViolation::NonFinite]);
    }

    let mut violations = Vec::new();

    // Comparisons are negated so that a NaN result counts as a failure
    let max_deviation = hermitian_deviation(rho);
    if !(max_deviation <= tolerances.hermitian) {
        violations.push(DensityViolation::NotHermitian { max_deviation });
    }

    let trace: Complex64 = rho[0][0] + rho[1][1];
    if !((trace - Complex64::new(1.0, 0.0)).norm() <= tolerances.trace) {
        violations.push(DensityViolation::TraceNotOne { trace });
    }

    let eigenvalues = hermitian_eigenvalues(rho);
    if !(eigenvalues[0] >= -tolerances.psd_floor) {
        violations.push(DensityViolation::NotPositiveSemidefinite { eigenvalues });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        debug!(?violations, "rejected density matrix");
        Err(violations)
    }
}
